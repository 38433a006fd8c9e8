//! Engine configuration: stake bound defaults and resolution-window thresholds.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AccuracyRateThresholds, ResolutionWindowThresholds, StakeBounds, DEFAULT_CRITICAL_BELOW,
    DEFAULT_MAX_STAKE_POINTS, DEFAULT_MIN_RESOLVED_PREDICTIONS, DEFAULT_MIN_STAKE_POINTS,
    DEFAULT_WATCH_BELOW, MAX_MIN_RESOLVED_PREDICTIONS,
};
use crate::error::ConfigError;

/// Stake bound defaults applied when a market configures none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeConfig {
    #[serde(default = "default_min_stake_points")]
    pub default_min_stake_points: u64,
    #[serde(default = "default_max_stake_points")]
    pub default_max_stake_points: u64,
}

const fn default_min_stake_points() -> u64 {
    DEFAULT_MIN_STAKE_POINTS
}

const fn default_max_stake_points() -> u64 {
    DEFAULT_MAX_STAKE_POINTS
}

impl StakeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_min_stake_points < 1 {
            return Err(ConfigError::InvalidValue {
                field: "default_min_stake_points",
                reason: "must be at least 1".into(),
            });
        }
        if self.default_max_stake_points < self.default_min_stake_points {
            return Err(ConfigError::InvalidValue {
                field: "default_max_stake_points",
                reason: format!(
                    "must be >= default_min_stake_points ({})",
                    self.default_min_stake_points
                ),
            });
        }
        Ok(())
    }
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            default_min_stake_points: default_min_stake_points(),
            default_max_stake_points: default_max_stake_points(),
        }
    }
}

/// Resolution-window classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    #[serde(default = "default_critical_below")]
    pub critical_below: f64,
    #[serde(default = "default_watch_below")]
    pub watch_below: f64,
    #[serde(default = "default_min_resolved_predictions")]
    pub min_resolved_predictions: u32,
}

fn default_critical_below() -> f64 {
    DEFAULT_CRITICAL_BELOW
}

fn default_watch_below() -> f64 {
    DEFAULT_WATCH_BELOW
}

const fn default_min_resolved_predictions() -> u32 {
    DEFAULT_MIN_RESOLVED_PREDICTIONS
}

impl ResolutionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.critical_below) {
            return Err(ConfigError::InvalidValue {
                field: "critical_below",
                reason: "must be between 0 and 1".into(),
            });
        }
        if !(self.critical_below..=1.0).contains(&self.watch_below) {
            return Err(ConfigError::InvalidValue {
                field: "watch_below",
                reason: format!("must be between critical_below ({}) and 1", self.critical_below),
            });
        }
        if !(1..=MAX_MIN_RESOLVED_PREDICTIONS).contains(&self.min_resolved_predictions) {
            return Err(ConfigError::InvalidValue {
                field: "min_resolved_predictions",
                reason: format!("must be between 1 and {MAX_MIN_RESOLVED_PREDICTIONS}"),
            });
        }
        Ok(())
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            critical_below: default_critical_below(),
            watch_below: default_watch_below(),
            min_resolved_predictions: default_min_resolved_predictions(),
        }
    }
}

/// Validated settings consumed by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// Bounds used when a market configures none.
    pub default_bounds: StakeBounds,
    /// Thresholds used when a caller supplies none.
    pub thresholds: ResolutionWindowThresholds,
}

impl From<(&StakeConfig, &ResolutionConfig)> for EngineConfig {
    fn from((stake, resolution): (&StakeConfig, &ResolutionConfig)) -> Self {
        Self {
            default_bounds: StakeBounds::new(
                stake.default_min_stake_points,
                stake.default_max_stake_points,
            ),
            thresholds: ResolutionWindowThresholds {
                accuracy_rate: AccuracyRateThresholds {
                    critical_below: resolution.critical_below,
                    watch_below: resolution.watch_below,
                },
                min_resolved_predictions: resolution.min_resolved_predictions,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(StakeConfig::default().validate().is_ok());
        assert!(ResolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn stake_config_rejects_inverted_bounds() {
        let config = StakeConfig {
            default_min_stake_points: 50,
            default_max_stake_points: 10,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "default_max_stake_points",
                ..
            })
        ));
    }

    #[test]
    fn resolution_config_rejects_watch_below_critical() {
        let config = ResolutionConfig {
            critical_below: 0.5,
            watch_below: 0.4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "watch_below",
                ..
            })
        ));
    }

    #[test]
    fn resolution_config_rejects_nan() {
        let config = ResolutionConfig {
            critical_below: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn engine_config_mirrors_sections() {
        let engine = EngineConfig::from((&StakeConfig::default(), &ResolutionConfig::default()));
        assert_eq!(engine, EngineConfig::default());
    }
}
