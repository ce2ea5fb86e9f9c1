//! Canonical re-encoding of a document.

use crate::cli::common::{load_config, read_document_bytes, CliError, CliResult};
use crate::codec;
use crate::storage;
use clap::Args;
use std::path::PathBuf;

/// Rewrite a document in canonical form
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Path to the document
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the result (defaults to rewriting FILE in place)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Only check whether FILE is already canonical; write nothing
    #[arg(long)]
    pub check: bool,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let pretty = !self.compact && config.output.pretty;

        let bytes = read_document_bytes(&self.file)?;
        let document = codec::decode_with(&bytes, &config.decode_options())
            .map_err(|e| CliError::validation(format!("{}: {e}", self.file.display())))?;

        if self.check {
            let canonical = storage::render(&document, pretty)
                .map_err(|e| CliError::io(format!("Failed to encode document: {e}")))?;

            if canonical == bytes {
                println!("✓ {} is canonical", self.file.display());
                return Ok(());
            }
            return Err(CliError::validation(format!(
                "{} is not in canonical form",
                self.file.display()
            )));
        }

        let target = self.output.as_ref().unwrap_or(&self.file);
        storage::write(&document, target, pretty)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("✓ Wrote {}", target.display());
        Ok(())
    }
}
