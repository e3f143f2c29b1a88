//! Dispatch: turns a `RenkoConfig` into a brick engine and runs it.

use tracing::debug;

use crate::bricks::{
    AdaptiveAtrBrickEngine, BrickEngine, BrickSource, FixedStepBrickEngine, PercentageBrickEngine,
};
use crate::config::{BrickSizing, RenkoConfig, RenkoOptions};
use crate::domain::RenkoChart;
use crate::error::{ChartError, ConfigError};

/// Create the brick engine selected by `config`.
pub fn create_engine(config: &RenkoConfig) -> Result<Box<dyn BrickEngine>, ConfigError> {
    let condensed = config.condensed();
    match config.sizing() {
        BrickSizing::Fixed(step) => Ok(Box::new(FixedStepBrickEngine::new(step, condensed)?)),
        BrickSizing::Percentage(fraction) => {
            Ok(Box::new(PercentageBrickEngine::new(fraction, condensed)?))
        }
        BrickSizing::Atr(window) => Ok(Box::new(AdaptiveAtrBrickEngine::new(window, condensed)?)),
    }
}

/// Build a Renko chart from `source` with the engine `config` selects.
///
/// Fixed and percentage sizing read closing prices, so both a `PriceSeries`
/// and an `OhlcSeries` are accepted. ATR sizing needs an `OhlcSeries`.
pub fn renko(source: &dyn BrickSource, config: &RenkoConfig) -> Result<RenkoChart, ChartError> {
    let engine = create_engine(config)?;
    debug!(
        engine = engine.name(),
        condensed = engine.condensed(),
        samples = source.closes().len(),
        "dispatching renko build"
    );
    engine.build(source)
}

/// Keyword-option form of [`renko`]: validates `options` first.
pub fn renko_with_options(
    source: &dyn BrickSource,
    options: RenkoOptions,
) -> Result<RenkoChart, ChartError> {
    let config = RenkoConfig::try_from(options)?;
    renko(source, &config)
}
