//! Small arithmetic helpers shared by the engines.

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sign as -1.0, 0.0 or 1.0. NaN maps to 0.0.
pub fn sign(x: f64) -> f64 {
    ((x > 0.0) as i8 - (x < 0.0) as i8) as f64
}

/// True range of a bar against the previous close.
///
/// `max(high, prev_close) - min(low, prev_close)`, which equals the classic
/// `max(high-low, |high-prev_close|, |low-prev_close|)` whenever `high >= low`.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    high.max(prev_close) - low.min(prev_close)
}
