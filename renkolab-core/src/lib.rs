//! renkolab core: Renko bricks and Heikin-Ashi candles from OHLC series.
//!
//! This crate contains:
//! - Validated input series (`PriceSeries`, `OhlcSeries`)
//! - Three brick engines behind the `BrickEngine` trait: fixed step,
//!   percentage step, and ATR-adaptive step
//! - A dispatcher that selects the engine from a `RenkoConfig`
//! - The Heikin-Ashi transform
//! - Polars `DataFrame` adapters for table-shaped input and output
//!
//! Everything operates on complete in-memory sequences. No call keeps state
//! between invocations.

pub mod bricks;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod heikin_ashi;
pub mod math;
pub mod table;

#[cfg(test)]
mod testing;

pub use bricks::{
    AdaptiveAtrBrickEngine, BrickEngine, BrickSource, FixedStepBrickEngine, PercentageBrickEngine,
};
pub use config::{BrickSizing, RenkoConfig, RenkoOptions};
pub use dispatch::{create_engine, renko, renko_with_options};
pub use domain::{BrickDirection, Candle, HeikinAshiSeries, OhlcSeries, PriceSeries, RenkoChart};
pub use error::{ArithmeticError, ChartError, ConfigError, ShapeError};
pub use heikin_ashi::{heikin_ashi, HeikinAshiTransform};
