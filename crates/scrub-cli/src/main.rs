//! Record scrubbing CLI
//!
//! Command-line pipeline for scanning tabular records with embedded JSON
//! payloads, flagging PII, and writing redacted copies.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;
mod pipeline;

use commands::Cli;

fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the command
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            e.exit_code()
        }
    }
}
