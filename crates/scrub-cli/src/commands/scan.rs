//! CSV scan command.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Args;

use scrub_engine::{MaskOptions, Redactor};

use crate::output::{self, CliError};
use crate::pipeline;

/// Arguments for `scrub scan`.
#[derive(Args)]
pub struct ScanArgs {
    /// Input CSV with record_id and data_json columns
    input: PathBuf,

    /// Output CSV path
    #[arg(long, short, default_value = "redacted_output.csv")]
    output: PathBuf,

    /// Filler character for masked spans
    #[arg(long, default_value = "X")]
    mask_char: char,
}

impl ScanArgs {
    /// Runs the scan.
    pub fn run(self) -> Result<(), CliError> {
        let input = File::open(&self.input)
            .map_err(|e| CliError::io(format!("cannot open {}: {e}", self.input.display())))?;
        let output = File::create(&self.output)
            .map_err(|e| CliError::io(format!("cannot create {}: {e}", self.output.display())))?;

        let options = MaskOptions::default().with_mask_char(self.mask_char);
        let redactor = Redactor::with_options(options);
        let summary = pipeline::scan(BufReader::new(input), BufWriter::new(output), &redactor)?;

        output::success(&format!(
            "{} records scanned, {} flagged as PII",
            summary.total, summary.flagged
        ));
        if summary.undecodable > 0 {
            output::warn(&format!(
                "{} payloads could not be decoded and were passed through unredacted",
                summary.undecodable
            ));
        }
        output::info(&format!("wrote {}", self.output.display()));
        Ok(())
    }
}
