//! ATR-adaptive Renko bricks.
//!
//! Warm-up: ATR = mean(TR[1..=window]), TR[i] = max(high[i], close[i-1]) - min(low[i], close[i-1]).
//! Seed: close[window + 1]. Streaming from bar window + 2: walk the close with the
//! current ATR as step. Only a bar that formed bricks updates the ATR:
//! ATR = (ATR * (window - 1) + TR[i]) / window. Quiet bars leave it unchanged.
//! Lookback: window + 1 bars before the seed; at least one streamed bar is required.

use tracing::{debug, trace};

use super::{BrickEngine, BrickSource, BrickWalker};
use crate::domain::{OhlcSeries, RenkoChart};
use crate::error::{ArithmeticError, ChartError, ConfigError, ShapeError};
use crate::math::true_range;

#[derive(Debug, Clone)]
pub struct AdaptiveAtrBrickEngine {
    window: usize,
    condensed: bool,
    name: String,
}

impl AdaptiveAtrBrickEngine {
    pub fn new(window: usize, condensed: bool) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(Self {
            window,
            condensed,
            name: format!("atr_{window}"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Fewest bars `build` accepts: warm-up, seed, and one streamed bar.
    pub fn min_bars(&self) -> usize {
        self.window + 3
    }

    /// Initial ATR: mean true range over bars `1..=window`.
    pub fn warmup_atr(&self, ohlc: &OhlcSeries) -> Result<f64, ChartError> {
        self.check_len(ohlc)?;
        let (high, low, close) = (ohlc.high(), ohlc.low(), ohlc.close());
        let sum: f64 = (1..=self.window)
            .map(|i| true_range(high[i], low[i], close[i - 1]))
            .sum();
        Ok(sum / self.window as f64)
    }

    fn check_len(&self, ohlc: &OhlcSeries) -> Result<(), ArithmeticError> {
        if ohlc.len() < self.min_bars() {
            return Err(ArithmeticError::InsufficientSamples {
                window: self.window,
                required: self.min_bars(),
                available: ohlc.len(),
            });
        }
        Ok(())
    }
}

impl BrickEngine for AdaptiveAtrBrickEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window + 1
    }

    fn condensed(&self) -> bool {
        self.condensed
    }

    fn build(&self, source: &dyn BrickSource) -> Result<RenkoChart, ChartError> {
        let ohlc = source
            .ohlc()
            .ok_or(ShapeError::OhlcRequired { engine: "atr" })?;
        let mut atr = self.warmup_atr(ohlc)?;
        let (high, low, close) = (ohlc.high(), ohlc.low(), ohlc.close());
        let n = ohlc.len();
        let window = self.window as f64;

        let seed_index = self.window + 1;
        let mut walker = BrickWalker::new(close[seed_index], n - seed_index - 1, self.condensed);
        for i in (seed_index + 1)..n {
            if atr.is_nan() || atr <= 0.0 {
                return Err(ArithmeticError::NonPositiveStep {
                    index: i,
                    step: atr,
                }
                .into());
            }
            let bricks = walker.walk(i, close[i], atr)?;
            if bricks == 0 {
                continue;
            }
            trace!(bar = i, bricks, step = atr, "atr bricks");
            atr = (atr * (window - 1.0) + true_range(high[i], low[i], close[i - 1])) / window;
        }

        debug!(
            engine = %self.name,
            bars = n,
            bricks = walker.bricks(),
            final_atr = atr,
            "built atr chart"
        );
        Ok(walker.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_approx, assert_levels, make_ohlc, prices, DEFAULT_EPSILON};

    /// Bars whose true ranges over 1..=3 are exactly [2, 4, 3].
    fn warmup_bars() -> OhlcSeries {
        OhlcSeries::from_rows(&[
            (10.0, 10.0, 10.0, 10.0),
            (10.0, 11.0, 9.0, 10.0),  // TR = 11 - 9 = 2
            (10.0, 12.0, 8.0, 10.0),  // TR = 12 - 8 = 4
            (10.0, 11.0, 8.0, 10.0),  // TR = 11 - 8 = 3
            (10.0, 10.5, 9.5, 10.0),  // seed bar
            (10.0, 13.0, 10.0, 13.0), // streamed: 3 / 3 = 1 brick
            (13.0, 13.5, 12.0, 12.5), // streamed: below one step
        ])
        .unwrap()
    }

    #[test]
    fn rejects_zero_window() {
        assert_eq!(
            AdaptiveAtrBrickEngine::new(0, true).unwrap_err(),
            ConfigError::ZeroWindow
        );
    }

    #[test]
    fn warmup_is_mean_true_range() {
        let engine = AdaptiveAtrBrickEngine::new(3, true).unwrap();
        assert_approx(engine.warmup_atr(&warmup_bars()).unwrap(), 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn warmup_uses_previous_close_for_gaps() {
        // bar 1 gaps up from close 100: TR = 115 - 100 = 15
        let ohlc = OhlcSeries::from_rows(&[
            (98.0, 102.0, 97.0, 100.0),
            (110.0, 115.0, 108.0, 112.0),
            (112.0, 113.0, 111.0, 112.0),
            (112.0, 113.0, 111.0, 112.0),
        ])
        .unwrap();
        let engine = AdaptiveAtrBrickEngine::new(1, true).unwrap();
        assert_approx(engine.warmup_atr(&ohlc).unwrap(), 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn streams_after_warmup() {
        let engine = AdaptiveAtrBrickEngine::new(3, false).unwrap();
        let chart = engine.build(&warmup_bars()).unwrap();
        // seed close[4] = 10; bar 5 close 13 with ATR 3 -> one brick at 13.
        // ATR becomes (3*2 + (13 - 10)) / 3 = 3; bar 6 moves 0.5 -> nothing.
        assert_levels(chart.levels(), &[10.0, 13.0]);
    }

    #[test]
    fn condensed_fills_quiet_bars() {
        let engine = AdaptiveAtrBrickEngine::new(3, true).unwrap();
        let chart = engine.build(&warmup_bars()).unwrap();
        assert_levels(chart.levels(), &[10.0, 13.0, 13.0]);
    }

    /// Warm-up ATR 2.0 (window 1, bar 1 TR = 2). Bar 3 has a TR of 6 but moves
    /// only 1.5 from the seed.
    fn quiet_wide_bar() -> OhlcSeries {
        OhlcSeries::from_rows(&[
            (100.0, 100.0, 100.0, 100.0),
            (100.0, 101.0, 99.0, 100.0),
            (100.0, 100.5, 99.5, 100.0),  // seed
            (100.0, 104.0, 98.0, 101.5),  // TR 6, no brick
            (101.5, 105.5, 101.0, 105.0), // move 5 from the seed
        ])
        .unwrap()
    }

    #[test]
    fn quiet_bars_leave_atr_unchanged() {
        // ATR stays at 2 across bar 3, so bar 4 forms two bricks.
        let engine = AdaptiveAtrBrickEngine::new(1, false).unwrap();
        assert_levels(
            engine.build(&quiet_wide_bar()).unwrap().levels(),
            &[100.0, 102.0, 104.0],
        );

        let condensed = AdaptiveAtrBrickEngine::new(1, true).unwrap();
        assert_levels(
            condensed.build(&quiet_wide_bar()).unwrap().levels(),
            &[100.0, 100.0, 102.0, 104.0],
        );
    }

    #[test]
    fn brick_bars_update_atr() {
        // Bar 3 forms one brick (move 2.5, ATR 2) and its TR of 5 lifts the ATR
        // to 5, so bar 4's further move of 3 forms nothing.
        let ohlc = OhlcSeries::from_rows(&[
            (100.0, 100.0, 100.0, 100.0),
            (100.0, 101.0, 99.0, 100.0),
            (100.0, 100.5, 99.5, 100.0),  // seed
            (100.0, 103.0, 98.0, 102.5),  // TR 5, one brick to 102
            (102.5, 105.5, 102.0, 105.0), // move 3 from 102 < 5
        ])
        .unwrap();
        let engine = AdaptiveAtrBrickEngine::new(1, false).unwrap();
        assert_levels(engine.build(&ohlc).unwrap().levels(), &[100.0, 102.0]);
    }

    #[test]
    fn too_few_bars_is_an_arithmetic_fault() {
        let engine = AdaptiveAtrBrickEngine::new(3, true).unwrap();
        let err = engine.build(&make_ohlc(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap_err();
        assert_eq!(
            err,
            ChartError::Arithmetic(ArithmeticError::InsufficientSamples {
                window: 3,
                required: 6,
                available: 5
            })
        );
    }

    #[test]
    fn flat_warmup_is_a_non_positive_step() {
        let ohlc = OhlcSeries::from_rows(&[(5.0, 5.0, 5.0, 5.0); 6]).unwrap();
        let engine = AdaptiveAtrBrickEngine::new(2, true).unwrap();
        let err = engine.build(&ohlc).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Arithmetic(ArithmeticError::NonPositiveStep { index: 4, .. })
        ));
    }

    #[test]
    fn bare_prices_are_rejected() {
        let engine = AdaptiveAtrBrickEngine::new(2, true).unwrap();
        let err = engine.build(&prices(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap_err();
        assert_eq!(
            err,
            ChartError::InputShape(ShapeError::OhlcRequired { engine: "atr" })
        );
    }

    #[test]
    fn lookback_and_name() {
        let engine = AdaptiveAtrBrickEngine::new(14, true).unwrap();
        assert_eq!(engine.lookback(), 15);
        assert_eq!(engine.min_bars(), 17);
        assert_eq!(engine.name(), "atr_14");
    }
}
