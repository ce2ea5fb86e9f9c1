//! Application-wide constants.
//!
//! This module defines constants used throughout the crate,
//! including the application name and the supported format version.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Custard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "custard";

/// The single document format version this crate reads and writes.
pub const CUSTARD_VERSION: &str = "1.0";

/// Conventional file extension for encoded documents.
pub const FILE_EXTENSION: &str = "json";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CUSTARD_CONFIG_DIR";
