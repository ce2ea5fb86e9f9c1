//! JSON codec for Custard documents.
//!
//! The codec works over [`serde_json::Value`] rather than derived
//! implementations so that every variant's discriminant, every defaulted
//! field and every normalization step is explicit, and so that failures
//! carry the field path where they happened.
//!
//! # Entry points
//!
//! - [`encode`] / [`encode_pretty`]: document → bytes (deterministic)
//! - [`decode`] / [`decode_str`] / [`decode_with`]: bytes → document
//! - [`to_value`] / [`from_value`]: document ↔ JSON tree
//!
//! Decoding is all-or-nothing; nothing is returned unless the whole
//! document decoded.

pub mod action;
mod document;
pub mod key;
mod reader;
pub mod specifier;

use crate::error::Result;
use crate::models::Custard;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub use document::{decode_document, encode_document};

/// What to do when two key records decode to the same specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one
    #[default]
    LastWins,
    /// Fail with [`crate::CustardError::DuplicateSpecifier`]
    Reject,
}

/// Knobs for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Handling of colliding key specifiers
    pub duplicate_specifiers: DuplicatePolicy,
}

impl DecodeOptions {
    /// Options that reject duplicate specifiers.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            duplicate_specifiers: DuplicatePolicy::Reject,
        }
    }
}

/// Encodes a document as a JSON tree.
///
/// Fails only for values JSON cannot carry (a non-finite scroll count).
pub fn to_value(document: &Custard) -> Result<Value> {
    encode_document(document)
}

/// Decodes a document from a JSON tree.
pub fn from_value(value: &Value, options: &DecodeOptions) -> Result<Custard> {
    decode_document(value, options)
}

/// Encodes a document as compact JSON bytes.
pub fn encode(document: &Custard) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&to_value(document)?)?)
}

/// Encodes a document as indented JSON bytes.
pub fn encode_pretty(document: &Custard) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&to_value(document)?)?)
}

/// Decodes a document with default options.
pub fn decode(bytes: &[u8]) -> Result<Custard> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decodes a document from a string with default options.
pub fn decode_str(text: &str) -> Result<Custard> {
    decode(text.as_bytes())
}

/// Decodes a document with explicit options.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Custard> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value, options)
}

impl Serialize for Custard {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_value(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Custard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value, &DecodeOptions::default()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presets::sample_custard;
    use crate::models::{InputStyle, Language};

    #[test]
    fn test_roundtrip_bytes() {
        let doc = sample_custard("sample", "Sample", Language::JaJp, InputStyle::Direct);
        let bytes = encode(&doc).unwrap();
        assert_eq!(decode(&bytes).unwrap(), doc);
        let pretty = encode_pretty(&doc).unwrap();
        assert_eq!(decode(&pretty).unwrap(), doc);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let doc = sample_custard("sample", "Sample", Language::JaJp, InputStyle::Direct);
        assert_eq!(encode(&doc).unwrap(), encode(&doc.clone()).unwrap());
    }

    #[test]
    fn test_serde_impls_delegate_to_codec() {
        let doc = sample_custard("serde", "Serde", Language::ElGr, InputStyle::Direct);
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(text.as_bytes(), encode(&doc).unwrap().as_slice());
        let parsed: Custard = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_syntax_error() {
        let err = decode_str("{ not json").unwrap_err();
        assert_eq!(err.kind(), "json");
    }
}
