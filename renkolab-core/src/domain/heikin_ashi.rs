//! HeikinAshiSeries: smoothed OHLC columns.

use serde::{Deserialize, Serialize};

use super::Candle;

/// Output of the Heikin-Ashi transform.
///
/// Row `i` corresponds to source bar `i + 1`; the first source bar only seeds
/// the recurrence. Serializes as a mapping with `open`, `high`, `low`, `close`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeikinAshiSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl HeikinAshiSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, candle: Candle) {
        self.open.push(candle.open);
        self.high.push(candle.high);
        self.low.push(candle.low);
        self.close.push(candle.close);
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn candle(&self, index: usize) -> Option<Candle> {
        if index >= self.len() {
            return None;
        }
        Some(Candle::new(
            self.open[index],
            self.high[index],
            self.low[index],
            self.close[index],
        ))
    }

    pub fn candles(&self) -> impl Iterator<Item = Candle> + '_ {
        (0..self.len()).filter_map(move |i| self.candle(i))
    }
}
