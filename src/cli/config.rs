//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{InputStyle, Language, WireEnum};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Indent written documents (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,

    /// Reject documents with duplicate key positions (true or false)
    #[arg(long, value_name = "BOOL")]
    reject_duplicates: Option<bool>,

    /// Default language for new documents
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Default input style for new documents
    #[arg(long, value_name = "STYLE")]
    input_style: Option<String>,

    /// Directory `sample` writes to when no output path is given
    #[arg(long, value_name = "DIR")]
    sample_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    output: OutputSection,
    decode: DecodeSection,
    defaults: DefaultsSection,
}

#[derive(Serialize, Debug)]
struct OutputSection {
    pretty: bool,
}

#[derive(Serialize, Debug)]
struct DecodeSection {
    reject_duplicate_specifiers: bool,
}

#[derive(Serialize, Debug)]
struct DefaultsSection {
    language: &'static str,
    input_style: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_dir: Option<String>,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            output: OutputSection {
                pretty: config.output.pretty,
            },
            decode: DecodeSection {
                reject_duplicate_specifiers: config.decode.reject_duplicate_specifiers,
            },
            defaults: DefaultsSection {
                language: config.defaults.language.as_wire(),
                input_style: config.defaults.input_style.as_wire(),
                sample_dir: config
                    .defaults
                    .sample_dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&ConfigOutput::from(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.pretty.is_none()
            && self.reject_duplicates.is_none()
            && self.language.is_none()
            && self.input_style.is_none()
            && self.sample_dir.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --pretty, --reject-duplicates, --language, --input-style, or --sample-dir",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }
        if let Some(reject) = self.reject_duplicates {
            config.decode.reject_duplicate_specifiers = reject;
        }
        if let Some(value) = &self.language {
            config.defaults.language = value
                .parse::<Language>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(value) = &self.input_style {
            config.defaults.input_style = value
                .parse::<InputStyle>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(dir) = &self.sample_dir {
            if dir.is_file() {
                return Err(CliError::validation(format!(
                    "Sample directory is a file, not a directory: {}",
                    dir.display()
                )));
            }
            std::fs::create_dir_all(dir).map_err(|e| {
                CliError::io(format!(
                    "Failed to create sample directory {}: {e}",
                    dir.display()
                ))
            })?;
            config.defaults.sample_dir = Some(dir.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Custard Configuration");
    println!("=====================");
    println!();

    println!("Output:");
    println!("  Pretty: {}", config.output.pretty);
    println!();

    println!("Decode:");
    println!(
        "  Reject Duplicate Specifiers: {}",
        config.decode.reject_duplicate_specifiers
    );
    println!();

    println!("Defaults:");
    println!("  Language:    {}", config.defaults.language);
    println!("  Input Style: {}", config.defaults.input_style);
    match &config.defaults.sample_dir {
        Some(dir) => println!("  Sample Dir:  {}", dir.display()),
        None => println!("  Sample Dir:  (not configured)"),
    }
    println!();
}
