//! User configuration for the `custard` tool.
//!
//! Output formatting, decode strictness and defaults for new documents,
//! stored as TOML in the platform config directory.

use crate::codec::{DecodeOptions, DuplicatePolicy};
use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::models::{InputStyle, Language};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent written documents (compact when false)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// How documents are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Fail when two key records share a position instead of keeping the last
    #[serde(default)]
    pub reject_duplicate_specifiers: bool,
}

/// Values used when creating new documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Language of new documents
    pub language: Language,
    /// Input style of new documents
    pub input_style: InputStyle,
    /// Directory `sample` writes to when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_dir: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: Language::JaJp,
            input_style: InputStyle::Direct,
            sample_dir: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$CUSTARD_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/Custard/config.toml`
/// - macOS: `~/Library/Application Support/Custard/config.toml`
/// - Windows: `%APPDATA%\Custard\config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Decode settings
    #[serde(default)]
    pub decode: DecodeConfig,
    /// New-document defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `sample_dir`, if set, is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.defaults.sample_dir {
            if dir.is_file() {
                anyhow::bail!(
                    "Sample directory is a file, not a directory: {}",
                    dir.display()
                );
            }
        }

        Ok(())
    }

    /// Codec options derived from the `[decode]` section.
    #[must_use]
    pub const fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            duplicate_specifiers: if self.decode.reject_duplicate_specifiers {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::LastWins
            },
        }
    }
}
