//! Brick sizing configuration.
//!
//! `RenkoOptions` is the loose keyword-option bag (`fixed`, `percentage`,
//! `atr`, `condensed`) as it appears in a TOML or JSON document. Converting it
//! into a `RenkoConfig` checks that exactly one sizing option is present and
//! that its value is in range; after that the sizing is a closed `BrickSizing`
//! variant and the dispatcher never re-checks it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How brick size is chosen. Exactly one per chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickSizing {
    /// Constant absolute step.
    Fixed(f64),
    /// Relative move from the anchor, as a fraction (0.01 = 1%).
    Percentage(f64),
    /// Running Average True Range over this many bars.
    Atr(usize),
}

impl BrickSizing {
    /// Option name as it appears in a config document.
    pub fn option_name(&self) -> &'static str {
        match self {
            BrickSizing::Fixed(_) => "fixed",
            BrickSizing::Percentage(_) => "percentage",
            BrickSizing::Atr(_) => "atr",
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            BrickSizing::Fixed(value) | BrickSizing::Percentage(value) => {
                if value.is_finite() && value > 0.0 {
                    Ok(())
                } else {
                    Err(ConfigError::NonPositive {
                        option: self.option_name(),
                        value,
                    })
                }
            }
            BrickSizing::Atr(0) => Err(ConfigError::ZeroWindow),
            BrickSizing::Atr(_) => Ok(()),
        }
    }
}

fn default_condensed() -> bool {
    true
}

/// Validated chart configuration: one sizing strategy plus the condensed flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RenkoOptions", into = "RenkoOptions")]
pub struct RenkoConfig {
    sizing: BrickSizing,
    condensed: bool,
}

impl RenkoConfig {
    pub fn new(sizing: BrickSizing, condensed: bool) -> Result<Self, ConfigError> {
        sizing.validate()?;
        Ok(Self { sizing, condensed })
    }

    /// Fixed-step sizing, condensed.
    pub fn fixed(step: f64) -> Result<Self, ConfigError> {
        Self::new(BrickSizing::Fixed(step), default_condensed())
    }

    /// Percentage sizing, condensed.
    pub fn percentage(fraction: f64) -> Result<Self, ConfigError> {
        Self::new(BrickSizing::Percentage(fraction), default_condensed())
    }

    /// ATR sizing, condensed.
    pub fn atr(window: usize) -> Result<Self, ConfigError> {
        Self::new(BrickSizing::Atr(window), default_condensed())
    }

    pub fn with_condensed(mut self, condensed: bool) -> Self {
        self.condensed = condensed;
        self
    }

    pub fn sizing(&self) -> BrickSizing {
        self.sizing
    }

    pub fn condensed(&self) -> bool {
        self.condensed
    }

    /// Parse a TOML document such as `fixed = 0.5` / `condensed = false`.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: RenkoOptions =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(options)
    }

    /// Parse a JSON object such as `{"atr": 14, "condensed": true}`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let options: RenkoOptions =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(options)
    }
}

/// Unvalidated keyword options. Unknown keys are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenkoOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atr: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condensed: Option<bool>,
}

impl TryFrom<RenkoOptions> for RenkoConfig {
    type Error = ConfigError;

    fn try_from(options: RenkoOptions) -> Result<Self, Self::Error> {
        let supplied: Vec<&'static str> = [
            ("fixed", options.fixed.is_some()),
            ("percentage", options.percentage.is_some()),
            ("atr", options.atr.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect();
        if supplied.len() > 1 {
            return Err(ConfigError::Ambiguous(supplied));
        }

        let sizing = match (options.fixed, options.percentage, options.atr) {
            (Some(step), _, _) => BrickSizing::Fixed(step),
            (_, Some(fraction), _) => BrickSizing::Percentage(fraction),
            (_, _, Some(window)) if window <= 0 => {
                return Err(ConfigError::NonPositive {
                    option: "atr",
                    value: window as f64,
                })
            }
            (_, _, Some(window)) => BrickSizing::Atr(window as usize),
            (None, None, None) => return Err(ConfigError::NoSizing),
        };

        RenkoConfig::new(sizing, options.condensed.unwrap_or_else(default_condensed))
    }
}

impl From<RenkoConfig> for RenkoOptions {
    fn from(config: RenkoConfig) -> Self {
        let mut options = RenkoOptions {
            condensed: Some(config.condensed),
            ..Default::default()
        };
        match config.sizing {
            BrickSizing::Fixed(step) => options.fixed = Some(step),
            BrickSizing::Percentage(fraction) => options.percentage = Some(fraction),
            BrickSizing::Atr(window) => options.atr = Some(window as i64),
        }
        options
    }
}
