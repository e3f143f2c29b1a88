//! Percentage-step Renko bricks.
//!
//! inc = (price - anchor) / anchor. A sample forms bricks once |inc| >= percentage.
//! Brick count: |floor(inc / percentage)|, so a falling move rounds away from zero.
//! Brick step: floor((percentage * (price - anchor)) / inc), i.e. the whole-unit
//! part of `percentage * anchor`, evaluated in that order.

use tracing::{debug, warn};

use super::{BrickEngine, BrickSource, BrickWalker};
use crate::domain::RenkoChart;
use crate::error::{ArithmeticError, ChartError, ConfigError, ShapeError};
use crate::math::sign;

#[derive(Debug, Clone)]
pub struct PercentageBrickEngine {
    percentage: f64,
    condensed: bool,
    name: String,
}

impl PercentageBrickEngine {
    /// `percentage` is a fraction: 0.01 means one percent.
    pub fn new(percentage: f64, condensed: bool) -> Result<Self, ConfigError> {
        if !(percentage.is_finite() && percentage > 0.0) {
            return Err(ConfigError::NonPositive {
                option: "percentage",
                value: percentage,
            });
        }
        Ok(Self {
            percentage,
            condensed,
            name: format!("percentage_{percentage}"),
        })
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl BrickEngine for PercentageBrickEngine {
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
        let pct = self.percentage;

        let mut walker = BrickWalker::new(seed, prices.len(), self.condensed);
        for (index, &price) in prices.iter().enumerate() {
            let last_price = walker.last_price();
            if last_price == 0.0 {
                return Err(ArithmeticError::ZeroAnchor { index }.into());
            }

            let delta = price - last_price;
            let inc = delta / last_price;
            if inc.abs() < pct {
                walker.hold();
                continue;
            }

            let count = (inc / pct).floor().abs();
            let step = ((pct * delta) / inc).floor();
            if step == 0.0 {
                warn!(
                    index,
                    anchor = last_price,
                    percentage = pct,
                    "percentage step floors to zero; bricks repeat the anchor"
                );
            }
            walker.emit(index, sign(delta), step, count)?;
        }

        debug!(
            engine = %self.name,
            samples = prices.len(),
            bricks = walker.bricks(),
            "built percentage chart"
        );
        Ok(walker.finish())
    }
}
