//! Custard keyboard-layout documents.
//!
//! This library provides the Custard data model (metadata, layout, keys,
//! variations and actions), a lossless JSON codec for it, and small helpers
//! for storing documents and reading user configuration.

// Module declarations
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage;

pub use codec::{decode, decode_str, decode_with, encode, encode_pretty, DecodeOptions, DuplicatePolicy};
pub use error::{CustardError, Result};
pub use models::Custard;
