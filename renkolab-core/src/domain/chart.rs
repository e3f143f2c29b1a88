//! RenkoChart: the signed brick-level output of every brick engine.

use serde::{Deserialize, Serialize};

/// Direction encoded in the sign of a brick level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickDirection {
    Up,
    Down,
}

impl BrickDirection {
    /// Positive levels are up bricks, negative levels down bricks.
    /// Zero (and NaN) carries no direction.
    pub fn from_level(level: f64) -> Option<Self> {
        if level > 0.0 {
            Some(BrickDirection::Up)
        } else if level < 0.0 {
            Some(BrickDirection::Down)
        } else {
            None
        }
    }
}

/// Ordered brick levels. The first entry is always the seed price.
///
/// Each level's magnitude is the price at the bottom of the brick and its sign
/// is the brick direction. In condensed charts a level is repeated for every
/// sample that did not move far enough to form a brick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenkoChart {
    levels: Vec<f64>,
}

impl RenkoChart {
    /// Start a chart at `seed`, reserving room for `capacity` entries.
    pub(crate) fn seeded(seed: f64, capacity: usize) -> Self {
        let mut levels = Vec::with_capacity(capacity.max(1));
        levels.push(seed);
        Self { levels }
    }

    pub(crate) fn push(&mut self, level: f64) {
        self.levels.push(level);
    }

    /// Append a copy of the last level (condensed filler).
    pub(crate) fn repeat_last(&mut self) {
        let last = self.last();
        self.levels.push(last);
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a chart holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn seed(&self) -> f64 {
        self.levels[0]
    }

    pub fn last(&self) -> f64 {
        self.levels[self.levels.len() - 1]
    }

    /// Direction of every entry; `None` for zero levels.
    pub fn directions(&self) -> Vec<Option<BrickDirection>> {
        self.levels
            .iter()
            .map(|&l| BrickDirection::from_level(l))
            .collect()
    }

    /// Absolute brick prices with the direction sign stripped.
    pub fn prices(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.abs()).collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.levels
    }
}

impl From<RenkoChart> for Vec<f64> {
    fn from(chart: RenkoChart) -> Self {
        chart.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_sign() {
        assert_eq!(BrickDirection::from_level(101.0), Some(BrickDirection::Up));
        assert_eq!(BrickDirection::from_level(-99.0), Some(BrickDirection::Down));
        assert_eq!(BrickDirection::from_level(0.0), None);
    }

    #[test]
    fn seeded_chart_accessors() {
        let mut chart = RenkoChart::seeded(100.0, 4);
        chart.push(101.0);
        chart.repeat_last();
        chart.push(-100.0);
        assert_eq!(chart.levels(), &[100.0, 101.0, 101.0, -100.0]);
        assert_eq!(chart.seed(), 100.0);
        assert_eq!(chart.last(), -100.0);
        assert_eq!(chart.prices(), vec![100.0, 101.0, 101.0, 100.0]);
        assert_eq!(
            chart.directions(),
            vec![
                Some(BrickDirection::Up),
                Some(BrickDirection::Up),
                Some(BrickDirection::Up),
                Some(BrickDirection::Down)
            ]
        );
    }

    #[test]
    fn chart_serializes_as_plain_array() {
        let mut chart = RenkoChart::seeded(100.0, 2);
        chart.push(-99.0);
        assert_eq!(serde_json::to_string(&chart).unwrap(), "[100.0,-99.0]");
    }
}
