//! Handler for the `config` command group, and configuration loading.

use std::path::{Path, PathBuf};

use serde_json::json;

use super::diagnostic::ConfigDiagnostic;
use super::output;
use crate::app::Config;
use crate::error::{ConfigError, Error, Result};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "reviewpool.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// An explicit path wins; otherwise use the default file when present.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::File(path.to_path_buf()),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::File(default.to_path_buf())
                } else {
                    Self::Defaults
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Defaults => "built-in defaults".to_string(),
        }
    }
}

/// Load the configuration from `source`.
///
/// TOML syntax and type errors are printed as a miette diagnostic against the
/// file text before the error is returned.
pub fn load(source: &ConfigSource) -> Result<Config> {
    let ConfigSource::File(path) = source else {
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    match Config::parse(&content) {
        Err(Error::Config(ConfigError::Parse(err))) => {
            if !output::is_json() {
                let name = path.display().to_string();
                eprintln!(
                    "{}",
                    ConfigDiagnostic::from_toml(&name, &content, &err).render()
                );
            }
            Err(ConfigError::Parse(err).into())
        }
        other => other,
    }
}

/// Execute `config show`.
pub fn execute_show(config: &Config, source: &ConfigSource) -> Result<()> {
    if output::is_json() {
        return output::json_output(&json!({
            "source": source.describe(),
            "config": config,
        }));
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field("Source", source.describe());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Stake");
    output::field("Default min", config.stake.default_min_stake_points);
    output::field("Default max", config.stake.default_max_stake_points);

    output::section("Resolution");
    output::field(
        "Critical below",
        format!("{:.0}%", config.resolution.critical_below * 100.0),
    );
    output::field(
        "Watch below",
        format!("{:.0}%", config.resolution.watch_below * 100.0),
    );
    output::field("Min resolved", config.resolution.min_resolved_predictions);
    Ok(())
}

/// Execute `config validate`. Loading already validated the file.
pub fn execute_validate(source: &ConfigSource) -> Result<()> {
    if output::is_json() {
        return output::json_output(&json!({
            "source": source.describe(),
            "valid": true,
        }));
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Config Check");
    output::field("Source", source.describe());
    output::success("Configuration is valid");
    Ok(())
}
