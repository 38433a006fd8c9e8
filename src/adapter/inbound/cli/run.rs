//! Command dispatch.

use super::command::{Cli, Commands, ConfigCommand};
use super::config::{self, ConfigSource};
use super::{quote, risk, settle, snapshot, stake};
use crate::app::{Config, PlacementEngine};
use crate::error::Result;

/// Log level implied by repeated `-v` flags, if any.
#[must_use]
pub const fn verbose_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Load configuration, initialize logging, and run the selected command.
pub fn execute(cli: &Cli) -> Result<()> {
    let source = ConfigSource::locate(cli.config.as_deref());
    let mut config: Config = config::load(&source)?;
    if let Some(level) = verbose_level(cli.verbose) {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    tracing::debug!(?source, "Configuration loaded");

    let engine = PlacementEngine::new(config.engine());
    match &cli.command {
        Commands::Snapshot(args) => snapshot::run(args.input.as_deref()),
        Commands::Stake(args) => stake::run(&engine, args),
        Commands::Quote(args) => quote::run(&engine, args.input.as_deref()),
        Commands::Risk(args) => risk::run(&engine, args),
        Commands::Settle(args) => settle::run(args),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&config, &source),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&source),
    }
}
