//! Error taxonomy for encoding and decoding Custard documents.
//!
//! Decoding is all-or-nothing: the first failure aborts the call and is
//! returned with the dotted field path where it happened
//! (e.g. `interface.keys[2].key.press_actions[0].type`).

/// Result alias used throughout the codec.
pub type Result<T, E = CustardError> = std::result::Result<T, E>;

/// Errors produced while converting between documents and their wire form.
#[derive(thiserror::Error, Debug)]
pub enum CustardError {
    /// A fixed-vocabulary string (language, color, direction, ...) was not recognized.
    #[error("unknown {field} value '{value}'")]
    UnknownVariant {
        /// Field path or vocabulary name
        field: String,
        /// Offending wire string
        value: String,
    },

    /// The `type` discriminant of an action record was not recognized.
    #[error("{path}: unknown action type '{value}'")]
    UnknownActionType {
        /// Path of the discriminant field
        path: String,
        /// Offending discriminant
        value: String,
    },

    /// The `key_type` discriminant of a key record was not recognized.
    #[error("{path}: unknown key type '{value}'")]
    UnknownKeyType {
        /// Path of the discriminant field
        path: String,
        /// Offending discriminant
        value: String,
    },

    /// The `type` discriminant of a variation record was not recognized.
    #[error("{path}: unknown variation type '{value}'")]
    UnknownVariationType {
        /// Path of the discriminant field
        path: String,
        /// Offending discriminant
        value: String,
    },

    /// The `type` discriminant of a key layout was not recognized.
    #[error("{path}: unknown layout type '{value}'")]
    UnknownLayoutType {
        /// Path of the discriminant field
        path: String,
        /// Offending discriminant
        value: String,
    },

    /// A field required by the resolved variant is absent.
    #[error("{path}: missing required field")]
    MissingField {
        /// Path of the absent field
        path: String,
    },

    /// A field is present but holds the wrong kind of JSON value.
    #[error("{path}: expected {expected}")]
    InvalidField {
        /// Path of the offending field
        path: String,
        /// Human-readable description of the expected shape
        expected: &'static str,
    },

    /// Position data could not be interpreted as a known specifier shape.
    #[error("{path}: malformed position specifier: {reason}")]
    MalformedSpecifier {
        /// Path of the key record holding the specifier
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// The document declares a format version this crate does not handle.
    #[error("unsupported custard_version '{found}' (supported: {supported})", supported = crate::constants::CUSTARD_VERSION)]
    UnsupportedVersion {
        /// Version tag found in the document
        found: String,
    },

    /// Two key records resolved to the same specifier under the rejecting policy.
    #[error("{path}: duplicate position specifier")]
    DuplicateSpecifier {
        /// Path of the later, conflicting key record
        path: String,
    },

    /// JSON syntax error or byte-layer failure.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CustardError {
    /// Stable snake_case name of the error kind, used in machine-readable output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownVariant { .. } => "unknown_variant",
            Self::UnknownActionType { .. } => "unknown_action_type",
            Self::UnknownKeyType { .. } => "unknown_key_type",
            Self::UnknownVariationType { .. } => "unknown_variation_type",
            Self::UnknownLayoutType { .. } => "unknown_layout_type",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidField { .. } => "invalid_field",
            Self::MalformedSpecifier { .. } => "malformed_specifier",
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::DuplicateSpecifier { .. } => "duplicate_specifier",
            Self::Json(_) => "json",
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            path: path.into(),
            expected,
        }
    }

    pub(crate) fn malformed_specifier(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSpecifier {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
