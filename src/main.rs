use std::io::IsTerminal;

use clap::Parser;
use reviewpool::adapter::inbound::cli::command::{Cli, ColorChoice};
use reviewpool::adapter::inbound::cli::output::{self, OutputConfig};
use reviewpool::adapter::inbound::cli::run;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose, color));

    if let Err(e) = run::execute(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
