//! Terminal output formatting.
//!
//! Every command prints through these helpers so that `--json` and `--quiet`
//! behave the same everywhere. In JSON mode commands emit their structured
//! result once through [`json_output`]; the decorative helpers stay silent.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
    /// Emit ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Apply `style` only when colors are enabled.
fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if read_config().color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Human-readable lines are printed unless JSON or quiet mode is on.
fn human_output_enabled() -> bool {
    let config = read_config();
    !config.json && !config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if !human_output_enabled() {
        return;
    }
    println!(
        "{} {}",
        paint("reviewpool", |t| t.bold().to_string()),
        muted(version)
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if !human_output_enabled() {
        return;
    }
    println!();
    println!("{}", paint(title, |t| t.bold().to_string()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if !human_output_enabled() {
        return;
    }
    println!("  {:<20} {}", muted(label), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if !human_output_enabled() {
        return;
    }
    println!("  {} {}", positive("✓"), message);
}

/// Print a warning line. Shown in quiet mode too.
pub fn warning(message: &str) {
    if is_json() {
        return;
    }
    println!("  {} {}", paint("⚠", |t| t.yellow().to_string()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  {} {}", negative("×"), message);
}

/// Print a table of rows.
pub fn table<T: Tabled>(rows: Vec<T>) {
    if !human_output_enabled() {
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for line in table.to_string().lines() {
        println!("  {line}");
    }
}

/// Emit a serializable result as a single JSON document.
pub fn json_output<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional value, showing a dash when unknown.
pub fn optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| muted("—"), |v| v.to_string())
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    paint(&value.to_string(), |t| t.green().to_string())
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    paint(&value.to_string(), |t| t.red().to_string())
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    paint(&value.to_string(), |t| t.cyan().to_string())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    paint(&value.to_string(), |t| t.dimmed().to_string())
}
