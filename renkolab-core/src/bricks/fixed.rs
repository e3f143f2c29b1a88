//! Fixed-step Renko bricks.
//!
//! n = floor(|price - anchor| / step); emit n bricks of `step` toward the price.
//! Seed: the first sample. The first sample is also walked against itself, so
//! a condensed chart starts with two copies of the seed.

use tracing::debug;

use super::{BrickEngine, BrickSource, BrickWalker};
use crate::domain::RenkoChart;
use crate::error::{ChartError, ConfigError, ShapeError};

#[derive(Debug, Clone)]
pub struct FixedStepBrickEngine {
    step: f64,
    condensed: bool,
    name: String,
}

impl FixedStepBrickEngine {
    pub fn new(step: f64, condensed: bool) -> Result<Self, ConfigError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::NonPositive {
                option: "fixed",
                value: step,
            });
        }
        Ok(Self {
            step,
            condensed,
            name: format!("fixed_{step}"),
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl BrickEngine for FixedStepBrickEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn condensed(&self) -> bool {
        self.condensed
    }

    fn build(&self, source: &dyn BrickSource) -> Result<RenkoChart, ChartError> {
        let prices = source.closes();
        let seed = *prices.first().ok_or(ShapeError::Empty("prices"))?;

        let mut walker = BrickWalker::new(seed, prices.len(), self.condensed);
        for (index, &price) in prices.iter().enumerate() {
            walker.walk(index, price, self.step)?;
        }

        debug!(
            engine = %self.name,
            samples = prices.len(),
            bricks = walker.bricks(),
            "built fixed-step chart"
        );
        Ok(walker.finish())
    }
}
