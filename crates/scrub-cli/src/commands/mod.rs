//! CLI command definitions.

use clap::{Parser, Subcommand};

use crate::output::CliError;

mod categories;
mod redact;
mod scan;

/// PII scanning and redaction for tabular records.
#[derive(Parser)]
#[command(name = "scrub", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a CSV of records and write redacted output
    Scan(scan::ScanArgs),

    /// Redact a single JSON payload
    Redact(redact::RedactArgs),

    /// List recognized PII categories
    Categories,
}

impl Cli {
    /// Runs the selected command.
    pub fn run(self) -> Result<(), CliError> {
        match self.command {
            Command::Scan(args) => args.run(),
            Command::Redact(args) => args.run(),
            Command::Categories => categories::run(),
        }
    }
}
