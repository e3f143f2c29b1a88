//! Error taxonomy for chart construction.
//!
//! Three families, each its own enum so callers can match on the family:
//! - `ShapeError`: the input cannot be read as a price or OHLC series.
//! - `ConfigError`: the sizing options are missing, ambiguous or out of range.
//! - `ArithmeticError`: a sample makes the brick arithmetic undefined.
//!
//! All three fold into `ChartError`, which is what the public entry points return.

use thiserror::Error;

/// The input does not have the shape a series needs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("series '{0}' is empty")]
    Empty(&'static str),

    #[error("expected '{0}' array")]
    MissingField(&'static str),

    #[error("field '{field}' has {actual} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite value {value} in '{field}' at index {index}")]
    NonFinite {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' is not numeric: {reason}")]
    ColumnType { column: String, reason: String },

    #[error("null value in column '{column}' at row {row}")]
    NullValue { column: String, row: usize },

    #[error("{engine} bricks need open/high/low/close data, got a bare price series")]
    OhlcRequired { engine: &'static str },

    #[error("malformed OHLC document: {0}")]
    Malformed(String),
}

/// The sizing configuration is invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Not recognized method: expected one of 'fixed', 'percentage' or 'atr'")]
    NoSizing,

    #[error("conflicting sizing options: {0:?} (exactly one is allowed)")]
    Ambiguous(Vec<&'static str>),

    #[error("'{option}' must be a positive finite number, got {value}")]
    NonPositive { option: &'static str, value: f64 },

    #[error("'atr' window must be at least 1")]
    ZeroWindow,

    #[error("invalid config document: {0}")]
    Parse(String),
}

/// The brick arithmetic is undefined for a sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("anchor price is zero at sample {index}; percentage move is undefined")]
    ZeroAnchor { index: usize },

    #[error("ATR window {window} needs at least {required} bars, got {available}")]
    InsufficientSamples {
        window: usize,
        required: usize,
        available: usize,
    },

    #[error("ATR brick step is {step} at bar {index}; it must be positive")]
    NonPositiveStep { index: usize, step: f64 },

    #[error("sample {index} would emit {count} bricks, more than the limit of {limit}")]
    BrickOverflow {
        index: usize,
        count: f64,
        limit: usize,
    },
}

/// Top-level error returned by every public entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("input shape error: {0}")]
    InputShape(#[from] ShapeError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("arithmetic fault: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl ChartError {
    pub fn is_input_shape(&self) -> bool {
        matches!(self, ChartError::InputShape(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ChartError::Configuration(_))
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, ChartError::Arithmetic(_))
    }
}
