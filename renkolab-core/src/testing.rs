//! Test fixtures shared by the unit tests.

use crate::domain::{OhlcSeries, PriceSeries};

/// Assert two f64 values are approximately equal (within epsilon).
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Element-wise `assert_approx` plus a length check.
pub fn assert_levels(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: actual={actual:?}, expected={expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_approx(*a, *e, DEFAULT_EPSILON);
    }
}

/// Default epsilon for numeric tests.
pub const DEFAULT_EPSILON: f64 = 1e-10;

pub fn prices(values: &[f64]) -> PriceSeries {
    PriceSeries::new(values.to_vec()).unwrap()
}

/// Synthetic bars from close prices: open = prev close (or close for the
/// first bar), high = max(open, close) + 1, low = min(open, close) - 1.
pub fn make_ohlc(closes: &[f64]) -> OhlcSeries {
    let rows: Vec<(f64, f64, f64, f64)> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            (open, open.max(close) + 1.0, open.min(close) - 1.0, close)
        })
        .collect();
    OhlcSeries::from_rows(&rows).unwrap()
}
