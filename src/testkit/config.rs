//! Canonical test configurations.
//!
//! Single source of truth for engine settings used across tests.

use crate::app::EngineConfig;
use crate::domain::{AccuracyRateThresholds, ResolutionWindowThresholds, StakeBounds};

/// A complete configuration file exercising every section.
pub const FULL_TOML: &str = r#"
[logging]
level = "debug"
format = "json"

[stake]
default_min_stake_points = 10
default_max_stake_points = 250

[resolution]
critical_below = 0.3
watch_below = 0.5
min_resolved_predictions = 8
"#;

/// Engine settings with the given default bounds.
pub fn with_bounds(min_stake_points: u64, max_stake_points: u64) -> EngineConfig {
    EngineConfig {
        default_bounds: StakeBounds::new(min_stake_points, max_stake_points),
        ..Default::default()
    }
}

/// Engine settings with the given classification thresholds.
pub fn with_thresholds(
    critical_below: f64,
    watch_below: f64,
    min_resolved_predictions: u32,
) -> EngineConfig {
    EngineConfig {
        thresholds: ResolutionWindowThresholds {
            accuracy_rate: AccuracyRateThresholds {
                critical_below,
                watch_below,
            },
            min_resolved_predictions,
        },
        ..Default::default()
    }
}
