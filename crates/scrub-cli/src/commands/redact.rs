//! Single-payload redaction command.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use scrub_core::payload;
use scrub_engine::Redactor;

use crate::output::{self, CliError};

/// Arguments for `scrub redact`.
#[derive(Args)]
pub struct RedactArgs {
    /// JSON payload to redact
    #[arg(long, short, conflicts_with = "file")]
    text: Option<String>,

    /// Read the payload from a file
    #[arg(long, short, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Read the payload from stdin
    #[arg(long, conflicts_with_all = ["text", "file"])]
    stdin: bool,

    /// Print only the redacted JSON (no verdict)
    #[arg(long, short)]
    quiet: bool,
}

impl RedactArgs {
    /// Runs the redaction.
    pub fn run(self) -> Result<(), CliError> {
        let raw = Self::get_text(self.text, self.file, self.stdin)?;
        let record = payload::decode_payload(&raw)
            .map_err(|e| CliError::validation(format!("invalid payload: {e}")))?;

        let outcome = Redactor::new().process(&record);
        println!("{}", payload::encode_payload(&outcome.redacted));

        if !self.quiet {
            if outcome.classification.is_pii {
                let categories: Vec<String> = outcome
                    .classification
                    .present()
                    .map(|c| c.to_string())
                    .collect();
                output::warn(&format!("record is PII ({})", categories.join(", ")));
            } else {
                output::success("no PII found");
            }
        }
        Ok(())
    }

    fn get_text(
        text: Option<String>,
        file: Option<PathBuf>,
        stdin: bool,
    ) -> Result<String, CliError> {
        if let Some(text) = text {
            return Ok(text);
        }
        if let Some(path) = file {
            return std::fs::read_to_string(&path)
                .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())));
        }
        if stdin {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::io(format!("cannot read stdin: {e}")))?;
            return Ok(buffer);
        }
        Err(CliError::validation(
            "no payload given; use --text, --file, or --stdin",
        ))
    }
}
