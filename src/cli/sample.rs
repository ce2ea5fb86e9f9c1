//! Writes a small ready-made document to start from.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::constants::{APP_BINARY_NAME, FILE_EXTENSION};
use crate::models::presets::sample_custard;
use crate::models::{InputStyle, Language};
use crate::storage;
use clap::Args;
use std::path::PathBuf;

/// Create a sample document
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Where to write the document (defaults to `<sample_dir>/<identifier>.json`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Document identifier
    #[arg(long, default_value = "sample")]
    pub identifier: String,

    /// Name shown in the keyboard picker
    #[arg(long, value_name = "NAME", default_value = "Sample")]
    pub display_name: String,

    /// Language (ja_JP, en_US, el_GR, none, undefined)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Input style (direct, roman2kana)
    #[arg(long, value_name = "STYLE")]
    pub input_style: Option<String>,
}

impl SampleArgs {
    /// Execute the sample command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();

        let language = match &self.language {
            Some(value) => value
                .parse::<Language>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.defaults.language,
        };
        let input_style = match &self.input_style {
            Some(value) => value
                .parse::<InputStyle>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.defaults.input_style,
        };

        let target = match (&self.output, &config.defaults.sample_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join(format!("{}.{FILE_EXTENSION}", self.identifier)),
            (None, None) => {
                return Err(CliError::validation(format!(
                    "No output path given: pass --output or run `{APP_BINARY_NAME} config set --sample-dir DIR`"
                )))
            }
        };

        let document = sample_custard(
            self.identifier.clone(),
            self.display_name.clone(),
            language,
            input_style,
        );

        storage::write(&document, &target, config.output.pretty)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Wrote {}", target.display());
        Ok(())
    }
}
