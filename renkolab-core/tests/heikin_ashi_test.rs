//! Integration tests for the Heikin-Ashi entry points.

use std::collections::HashMap;

use renkolab_core::{heikin_ashi, ChartError, HeikinAshiSeries, OhlcSeries, ShapeError};

fn columns(pairs: &[(&str, Vec<f64>)]) -> HashMap<String, Vec<f64>> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn mapping_missing_low_is_input_shape_error() {
    let map = columns(&[
        ("open", vec![1.0, 2.0]),
        ("high", vec![2.0, 3.0]),
        ("close", vec![1.5, 2.5]),
    ]);
    let err = OhlcSeries::from_columns(&map).unwrap_err();
    assert_eq!(err, ShapeError::MissingField("low"));
    assert!(ChartError::from(err).is_input_shape());
}

#[test]
fn mapping_with_misaligned_lengths() {
    let map = columns(&[
        ("open", vec![1.0, 2.0]),
        ("high", vec![2.0, 3.0]),
        ("low", vec![0.5, 1.5]),
        ("close", vec![1.5]),
    ]);
    assert_eq!(
        OhlcSeries::from_columns(&map),
        Err(ShapeError::LengthMismatch {
            field: "close",
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn output_drops_seed_row() {
    let map = columns(&[
        ("open", vec![10.0, 11.0, 13.0, 12.0]),
        ("high", vec![12.0, 14.0, 13.5, 12.5]),
        ("low", vec![9.0, 10.0, 11.0, 10.0]),
        ("close", vec![11.0, 13.0, 12.0, 10.5]),
    ]);
    let ha = heikin_ashi(&OhlcSeries::from_columns(&map).unwrap());
    assert_eq!(ha.len(), 3);
    assert_eq!(ha.open.len(), 3);
    assert_eq!(ha.high.len(), 3);
    assert_eq!(ha.low.len(), 3);
    assert_eq!(ha.close.len(), 3);
    assert_eq!(ha.close[0], 12.0);
}

#[test]
fn flat_series_is_unchanged() {
    let k = 7.25;
    let ohlc = OhlcSeries::from_rows(&[(k, k, k, k); 10]).unwrap();
    let ha = heikin_ashi(&ohlc);
    for column in [&ha.open, &ha.high, &ha.low, &ha.close] {
        assert!(column.iter().all(|&v| v == k));
    }
}

#[test]
fn json_in_json_out_keeps_field_names() {
    let ohlc = OhlcSeries::from_json_str(
        r#"{"open": [10, 11, 13], "high": [12, 14, 13.5], "low": [9, 10, 11], "close": [11, 13, 12]}"#,
    )
    .unwrap();
    let ha = heikin_ashi(&ohlc);

    let json = serde_json::to_string(&ha).unwrap();
    let back: HeikinAshiSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ha);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for field in ["open", "high", "low", "close"] {
        assert_eq!(value[field].as_array().map(|a| a.len()), Some(2));
    }
}

#[test]
fn dataframe_missing_low_column() {
    use polars::prelude::*;

    let df = DataFrame::new(vec![
        Column::new("open".into(), vec![1.0, 2.0]),
        Column::new("high".into(), vec![2.0, 3.0]),
        Column::new("close".into(), vec![1.5, 2.5]),
    ])
    .unwrap();
    assert_eq!(
        OhlcSeries::from_dataframe(&df),
        Err(ShapeError::MissingColumn("low".into()))
    );
}
