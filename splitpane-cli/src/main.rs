//! splitpane CLI - inspect and edit a split-pane layout snapshot
//!
//! Every command opens the layout snapshot, applies one operation, and
//! writes the snapshot back when the layout changed.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use splitpane_core::tracing::{TracingLevel, init_tracing};

use crate::error::CliError;
use crate::util::Context;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(e) = run(cli) {
        if !quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let context = Context::load(cli.config.as_deref(), cli.state.as_deref())?;

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        context
            .settings
            .logging
            .tracing_level()
            .raised_by(cli.verbose)
    };
    if let Err(e) = init_tracing(&context.settings.logging.tracing_config(level)) {
        eprintln!("Warning: {e}");
    }

    commands::dispatch(&context, cli.command)
}
