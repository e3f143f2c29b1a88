//! Domain types for renkolab

pub mod bar;
pub mod chart;
pub mod heikin_ashi;
pub mod series;

pub use bar::Candle;
pub use chart::{BrickDirection, RenkoChart};
pub use heikin_ashi::HeikinAshiSeries;
pub use series::{OhlcSeries, PriceSeries, OHLC_FIELDS};
