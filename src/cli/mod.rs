//! CLI command handlers for Custard.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! [`CliResult`]; `main.rs` maps the error's [`ExitCode`] to the process
//! exit status.

pub mod common;
pub mod config;
pub mod format;
pub mod inspect;
pub mod sample;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use format::FormatArgs;
pub use inspect::InspectArgs;
pub use sample::SampleArgs;
pub use validate::ValidateArgs;
