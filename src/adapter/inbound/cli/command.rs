//! Command-line interface definitions.
//!
//! Defines the operator CLI using `clap`. Each subcommand feeds plain inputs
//! into one engine component and prints the structured result.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Outcome, RiskLevel, WindowSpan};

/// Pari-mutuel settlement and risk engine for review-outcome markets
#[derive(Parser, Debug)]
#[command(name = "reviewpool")]
#[command(version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a market snapshot from a JSON market payload
    Snapshot(InputArgs),

    /// Resolve a raw stake against stake bounds
    Stake(StakeArgs),

    /// Quote a placement request (bounds, stake, caps, snapshot)
    Quote(InputArgs),

    /// Classify one resolution window
    Risk(RiskArgs),

    /// Settle a stake once the review resolves
    Settle(SettleArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for commands that read a JSON payload.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file to read (defaults to stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Arguments for `stake`.
#[derive(Args, Debug)]
pub struct StakeArgs {
    /// Stake as entered by the observer
    #[arg(long, allow_hyphen_values = true)]
    pub raw: String,

    /// Minimum stake for the market
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Maximum stake for the market
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Stake to use when the raw value is not a number
    #[arg(long)]
    pub fallback: Option<f64>,
}

/// Arguments for `risk`.
#[derive(Args, Debug)]
pub struct RiskArgs {
    /// Predictions resolved within the window
    #[arg(long)]
    pub resolved: u32,

    /// Correct predictions within the window
    #[arg(long, conflicts_with = "rate")]
    pub correct: Option<u32>,

    /// Accuracy rate within the window
    #[arg(long)]
    pub rate: Option<f64>,

    /// Explicit backend classification
    #[arg(long)]
    pub level: Option<RiskLevel>,

    /// Window span [7d, 30d]
    #[arg(long)]
    pub span: Option<WindowSpan>,
}

/// Arguments for `settle`.
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Points staked on merge
    #[arg(long)]
    pub merge: f64,

    /// Points staked on reject
    #[arg(long)]
    pub reject: f64,

    /// Side the observer backed [merge, reject]
    #[arg(long)]
    pub side: Outcome,

    /// Observer's stake
    #[arg(long)]
    pub stake: u64,

    /// How the review resolved [merge, reject]
    #[arg(long)]
    pub outcome: Outcome,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}
