//! Polars adapters: read series out of a `DataFrame`, write results back into one.
//!
//! Any numeric column type is accepted and cast to Float64. Strings that do not
//! parse as numbers, and null cells, are input shape errors.

use polars::prelude::*;

use crate::domain::{HeikinAshiSeries, OhlcSeries, PriceSeries, RenkoChart};
use crate::error::ShapeError;

/// Read column `name` as a dense f64 vector.
fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, ShapeError> {
    let column = df
        .column(name)
        .map_err(|_| ShapeError::MissingColumn(name.to_string()))?;
    let type_err = |e: PolarsError| ShapeError::ColumnType {
        column: name.to_string(),
        reason: e.to_string(),
    };

    let floats = column
        .as_materialized_series()
        .strict_cast(&DataType::Float64)
        .map_err(type_err)?;
    let ca = floats.f64().map_err(type_err)?;

    ca.into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| ShapeError::NullValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

impl PriceSeries {
    /// Read one numeric column of `df` as a price series.
    pub fn from_dataframe_column(df: &DataFrame, name: &str) -> Result<Self, ShapeError> {
        Self::new(float_column(df, name)?)
    }
}

impl OhlcSeries {
    /// Read the `open`, `high`, `low` and `close` columns of `df`.
    /// Other columns (dates, volume, ...) are ignored.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, ShapeError> {
        Self::new(
            float_column(df, "open")?,
            float_column(df, "high")?,
            float_column(df, "low")?,
            float_column(df, "close")?,
        )
    }
}

impl HeikinAshiSeries {
    /// Four-column frame named `open`, `high`, `low`, `close`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new("open".into(), self.open.clone()),
            Column::new("high".into(), self.high.clone()),
            Column::new("low".into(), self.low.clone()),
            Column::new("close".into(), self.close.clone()),
        ])
    }
}

impl RenkoChart {
    /// Single-column frame holding the signed brick levels.
    pub fn to_dataframe(&self, name: &str) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![Column::new(name.into(), self.levels().to_vec())])
    }
}
