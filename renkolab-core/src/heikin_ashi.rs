//! Heikin-Ashi candles.
//!
//! ha_close[i] = mean(open, high, low, close)[i]
//! ha_open[i]  = mean(ha_open[i-1], ha_close[i-1]), seeded with mean(open[0], close[0])
//! ha_high[i]  = max(high[i], ha_open[i], ha_close[i])
//! ha_low[i]   = min(low[i], ha_open[i], ha_close[i])
//!
//! Bar 0 only seeds the recurrence and is dropped from the output.

use tracing::debug;

use crate::domain::{Candle, HeikinAshiSeries, OhlcSeries};
use crate::math::mean;

/// Stateless Heikin-Ashi transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeikinAshiTransform;

impl HeikinAshiTransform {
    pub fn new() -> Self {
        Self
    }

    /// Transform a validated OHLC series; the output has `ohlc.len() - 1` rows.
    pub fn transform(&self, ohlc: &OhlcSeries) -> HeikinAshiSeries {
        let n = ohlc.len();
        let mut out = HeikinAshiSeries::with_capacity(n.saturating_sub(1));
        let (o, h, l, c) = (ohlc.open(), ohlc.high(), ohlc.low(), ohlc.close());

        let mut prev_open = mean(&[o[0], c[0]]);
        let mut prev_close = mean(&[o[0], h[0], l[0], c[0]]);

        for i in 1..n {
            let ha_close = mean(&[o[i], h[i], l[i], c[i]]);
            let ha_open = mean(&[prev_open, prev_close]);
            let ha_high = h[i].max(ha_open).max(ha_close);
            let ha_low = l[i].min(ha_open).min(ha_close);
            out.push(Candle::new(ha_open, ha_high, ha_low, ha_close));

            prev_open = ha_open;
            prev_close = ha_close;
        }

        debug!(bars = n, candles = out.len(), "built heikin-ashi series");
        out
    }
}

/// Heikin-Ashi transform of `ohlc`.
pub fn heikin_ashi(ohlc: &OhlcSeries) -> HeikinAshiSeries {
    HeikinAshiTransform::new().transform(ohlc)
}
