//! Validated input series.
//!
//! Both containers are checked once at construction: non-empty, aligned, and
//! every value finite. The engines can then index freely without re-checking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

use super::Candle;
use crate::error::ShapeError;

/// Field names of an OHLC mapping, in the order they are checked.
pub const OHLC_FIELDS: [&str; 4] = ["open", "high", "low", "close"];

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), ShapeError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ShapeError::NonFinite {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

// ── PriceSeries ──────────────────────────────────────────────────────

/// An ordered, non-empty sequence of finite prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    values: Vec<f64>,
}

impl PriceSeries {
    pub fn new(values: Vec<f64>) -> Result<Self, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::Empty("prices"));
        }
        check_finite("prices", &values)?;
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = ShapeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for PriceSeries {
    type Error = ShapeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.values
    }
}

// ── OhlcSeries ───────────────────────────────────────────────────────

/// Four aligned, non-empty columns of finite prices.
///
/// Row `i` across the four columns describes one time bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OhlcColumns")]
pub struct OhlcSeries {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
}

/// Unvalidated column layout, used only for deserialization.
#[derive(Deserialize)]
struct OhlcColumns {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
}

impl TryFrom<OhlcColumns> for OhlcSeries {
    type Error = ShapeError;

    fn try_from(c: OhlcColumns) -> Result<Self, Self::Error> {
        OhlcSeries::new(c.open, c.high, c.low, c.close)
    }
}

impl OhlcSeries {
    /// Build from four parallel columns.
    ///
    /// Lengths are compared against `open`; the first misaligned field is reported.
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        let expected = open.len();
        for (field, column) in [("high", &high), ("low", &low), ("close", &close)] {
            if column.len() != expected {
                return Err(ShapeError::LengthMismatch {
                    field,
                    expected,
                    actual: column.len(),
                });
            }
        }
        if expected == 0 {
            return Err(ShapeError::Empty("ohlc"));
        }
        check_finite("open", &open)?;
        check_finite("high", &high)?;
        check_finite("low", &low)?;
        check_finite("close", &close)?;

        Ok(Self {
            open,
            high,
            low,
            close,
        })
    }

    /// Build from row tuples or candles.
    pub fn from_rows<T>(rows: &[T]) -> Result<Self, ShapeError>
    where
        T: Copy + Into<Candle>,
    {
        let n = rows.len();
        let mut open = Vec::with_capacity(n);
        let mut high = Vec::with_capacity(n);
        let mut low = Vec::with_capacity(n);
        let mut close = Vec::with_capacity(n);
        for &row in rows {
            let candle: Candle = row.into();
            open.push(candle.open);
            high.push(candle.high);
            low.push(candle.low);
            close.push(candle.close);
        }
        Self::new(open, high, low, close)
    }

    /// Build from a string-keyed column mapping. Extra keys are ignored.
    pub fn from_columns<K, S>(columns: &HashMap<K, Vec<f64>, S>) -> Result<Self, ShapeError>
    where
        K: Borrow<str> + Eq + Hash,
        S: BuildHasher,
    {
        let column = |field: &'static str| {
            columns
                .get(field)
                .cloned()
                .ok_or(ShapeError::MissingField(field))
        };
        Self::new(column("open")?, column("high")?, column("low")?, column("close")?)
    }

    /// Build from a JSON object holding `open`, `high`, `low` and `close` arrays.
    /// Extra keys (dates, volume, ...) are ignored.
    pub fn from_json_str(json: &str) -> Result<Self, ShapeError> {
        let doc: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ShapeError::Malformed(e.to_string()))?;
        let object = doc
            .as_object()
            .ok_or_else(|| ShapeError::Malformed("expected a JSON object".into()))?;

        let mut columns: HashMap<&str, Vec<f64>> = HashMap::with_capacity(4);
        for field in OHLC_FIELDS {
            let value = object.get(field).ok_or(ShapeError::MissingField(field))?;
            let array = value.as_array().ok_or(ShapeError::MissingField(field))?;
            let column = array
                .iter()
                .enumerate()
                .map(|(row, v)| {
                    v.as_f64().ok_or_else(|| ShapeError::ColumnType {
                        column: field.to_string(),
                        reason: format!("row {row} is {v}"),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            columns.insert(field, column);
        }
        Self::from_columns(&columns)
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Row `index` as a candle.
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

    /// The close column as a validated price series.
    pub fn closes(&self) -> PriceSeries {
        PriceSeries {
            values: self.close.clone(),
        }
    }
}
