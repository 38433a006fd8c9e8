use std::io::Write;

use reviewpool::app::Config;
use reviewpool::error::{ConfigError, Error};
use reviewpool::testkit::config::FULL_TOML;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

#[test]
fn config_loads_every_section() {
    let file = write_temp_config(FULL_TOML);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");

    let engine = config.engine();
    assert_eq!(engine.default_bounds.min_stake_points(), 10);
    assert_eq!(engine.default_bounds.max_stake_points(), 250);
    assert_eq!(engine.thresholds.accuracy_rate.critical_below, 0.3);
    assert_eq!(engine.thresholds.accuracy_rate.watch_below, 0.5);
    assert_eq!(engine.thresholds.min_resolved_predictions, 8);
}

#[test]
fn config_rejects_zero_min_stake() {
    let file = write_temp_config("[stake]\ndefault_min_stake_points = 0\n");
    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "default_min_stake_points",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid min stake error, got {err}"),
        Ok(config) => panic!(
            "Expected zero min stake to be rejected, got {}",
            config.stake.default_min_stake_points
        ),
    }
}

#[test]
fn config_rejects_inverted_stake_bounds() {
    let file = write_temp_config(
        "[stake]\ndefault_min_stake_points = 100\ndefault_max_stake_points = 50\n",
    );

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "default_max_stake_points",
            ..
        }))
    ));
}

#[test]
fn config_rejects_out_of_range_thresholds() {
    let file = write_temp_config("[resolution]\ncritical_below = 1.5\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "critical_below",
            ..
        }))
    ));

    let file = write_temp_config("[resolution]\nmin_resolved_predictions = 501\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "min_resolved_predictions",
            ..
        }))
    ));
}

#[test]
fn config_rejects_empty_log_level() {
    let file = write_temp_config("[logging]\nlevel = \"  \"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField {
            field: "logging.level"
        }))
    ));
}

#[test]
fn config_reports_toml_errors() {
    let file = write_temp_config("[stake\ndefault_min_stake_points = 5\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("missing.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
