//! Renko brick engines.
//!
//! Three engines share one walking procedure and differ only in how the brick
//! step is chosen for each sample:
//! - `FixedStepBrickEngine`: constant absolute step.
//! - `PercentageBrickEngine`: step derived from a relative move off the anchor.
//! - `AdaptiveAtrBrickEngine`: step equal to a running Average True Range.
//!
//! Every engine is a pure function of its input: the walker state lives on the
//! stack of a single `build` call, so engines are `Send + Sync` and reusable.

pub mod atr;
pub mod fixed;
pub mod percentage;

pub use atr::AdaptiveAtrBrickEngine;
pub use fixed::FixedStepBrickEngine;
pub use percentage::PercentageBrickEngine;

use crate::domain::{OhlcSeries, PriceSeries, RenkoChart};
use crate::error::{ArithmeticError, ChartError};
use crate::math::sign;

/// Most bricks a single sample may emit before the walk is aborted.
pub const MAX_BRICKS_PER_SAMPLE: usize = 1 << 20;

/// Anything a brick engine can read prices from.
///
/// Fixed and percentage engines walk `closes()`. The ATR engine also needs
/// highs and lows and therefore requires `ohlc()` to be present.
pub trait BrickSource {
    fn closes(&self) -> &[f64];

    fn ohlc(&self) -> Option<&OhlcSeries>;
}

impl BrickSource for PriceSeries {
    fn closes(&self) -> &[f64] {
        self.as_slice()
    }

    fn ohlc(&self) -> Option<&OhlcSeries> {
        None
    }
}

impl BrickSource for OhlcSeries {
    fn closes(&self) -> &[f64] {
        self.close()
    }

    fn ohlc(&self) -> Option<&OhlcSeries> {
        Some(self)
    }
}

/// Trait for brick engines.
///
/// `build` consumes the whole source and returns the complete chart, or the
/// first error encountered. A partial chart is never returned.
pub trait BrickEngine: Send + Sync {
    /// Human-readable name (e.g., "fixed_1", "atr_14").
    fn name(&self) -> &str;

    /// Number of leading bars consumed before the seed bar.
    fn lookback(&self) -> usize;

    /// Whether zero-brick samples append a repeated level.
    fn condensed(&self) -> bool;

    fn build(&self, source: &dyn BrickSource) -> Result<RenkoChart, ChartError>;
}

/// Walker state shared by all engines: the anchor price and the chart so far.
#[derive(Debug)]
pub(crate) struct BrickWalker {
    last_price: f64,
    chart: RenkoChart,
    condensed: bool,
    bricks: usize,
}

impl BrickWalker {
    /// `samples` is the number of prices that will be fed; the chart reserves
    /// one entry per sample plus the seed.
    pub(crate) fn new(seed: f64, samples: usize, condensed: bool) -> Self {
        Self {
            last_price: seed,
            chart: RenkoChart::seeded(seed, samples + 1),
            condensed,
            bricks: 0,
        }
    }

    pub(crate) fn last_price(&self) -> f64 {
        self.last_price
    }

    /// A sample that moved less than one step.
    pub(crate) fn hold(&mut self) {
        if self.condensed {
            self.chart.repeat_last();
        }
    }

    /// Walk sample `index` at `price` with a fixed `step`: size check first,
    /// then direction.
    ///
    /// Returns the number of bricks emitted.
    pub(crate) fn walk(
        &mut self,
        index: usize,
        price: f64,
        step: f64,
    ) -> Result<usize, ArithmeticError> {
        let count = ((price - self.last_price).abs() / step).floor();
        if count == 0.0 {
            self.hold();
            return Ok(0);
        }
        let direction = sign(price - self.last_price);
        self.emit(index, direction, step, count)
    }

    /// Append `count` bricks of `step` in `direction` from the anchor and move
    /// the anchor to the last emitted brick.
    ///
    /// `count` must be a whole number no larger than `MAX_BRICKS_PER_SAMPLE`.
    pub(crate) fn emit(
        &mut self,
        index: usize,
        direction: f64,
        step: f64,
        count: f64,
    ) -> Result<usize, ArithmeticError> {
        if !count.is_finite() || count > MAX_BRICKS_PER_SAMPLE as f64 {
            return Err(ArithmeticError::BrickOverflow {
                index,
                count,
                limit: MAX_BRICKS_PER_SAMPLE,
            });
        }
        let count = count as usize;
        for x in 1..=count {
            self.chart
                .push(direction * (self.last_price + direction * step * x as f64));
        }
        if count > 0 {
            self.last_price = self.chart.last().abs();
        }
        self.bricks += count;
        Ok(count)
    }

    pub(crate) fn bricks(&self) -> usize {
        self.bricks
    }

    pub(crate) fn finish(self) -> RenkoChart {
        self.chart
    }
}
