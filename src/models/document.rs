//! Top-level Custard document.

use crate::constants::CUSTARD_VERSION;
use crate::models::enums::{InputStyle, Language};
use crate::models::interface::Interface;

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Format version tag (always the supported version after decode)
    pub custard_version: String,
    /// Human-readable name
    pub display_name: String,
}

impl Metadata {
    /// Metadata for the current format version.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            custard_version: CUSTARD_VERSION.to_string(),
            display_name: display_name.into(),
        }
    }
}

/// A complete keyboard-layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct Custard {
    /// Unique identifier (also used as a custom tab identifier)
    pub identifier: String,
    /// Conversion language
    pub language: Language,
    /// Input style
    pub input_style: InputStyle,
    /// Version and display name
    pub metadata: Metadata,
    /// Keys and layout
    pub interface: Interface,
}

impl Custard {
    /// Assembles a document.
    pub fn new(
        identifier: impl Into<String>,
        language: Language,
        input_style: InputStyle,
        metadata: Metadata,
        interface: Interface,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            language,
            input_style,
            metadata,
            interface,
        }
    }
}
