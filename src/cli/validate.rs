//! Validation command for document files.

use crate::cli::common::{load_config, print_json, read_document_bytes, CliError, CliResult};
use crate::codec::{self, DecodeOptions};
use crate::models::Custard;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check that a document decodes cleanly
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the document
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject documents with duplicate key positions
    #[arg(long)]
    pub strict: bool,
}

/// Machine-readable result.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationIssue>,
}

#[derive(Debug, Serialize)]
struct ValidationIssue {
    kind: &'static str,
    message: String,
}

impl ValidationResponse {
    fn from_document(document: &Custard) -> Self {
        Self {
            valid: true,
            identifier: Some(document.identifier.clone()),
            display_name: Some(document.metadata.display_name.clone()),
            key_count: Some(document.interface.key_count()),
            error: None,
        }
    }

    fn from_error(err: &crate::CustardError) -> Self {
        Self {
            valid: false,
            identifier: None,
            display_name: None,
            key_count: None,
            error: Some(ValidationIssue {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let bytes = read_document_bytes(&self.file)?;

        let options = if self.strict {
            DecodeOptions::strict()
        } else {
            load_config().decode_options()
        };

        let response = match codec::decode_with(&bytes, &options) {
            Ok(document) => ValidationResponse::from_document(&document),
            Err(err) => ValidationResponse::from_error(&err),
        };

        if self.json {
            print_json(&response)?;
        } else if response.valid {
            println!("✓ Validation passed");
            if let (Some(identifier), Some(name), Some(count)) =
                (&response.identifier, &response.display_name, response.key_count)
            {
                println!("  Identifier: {identifier}");
                println!("  Name:       {name}");
                println!("  Keys:       {count}");
            }
        } else {
            println!("✗ Validation failed");
            if let Some(issue) = &response.error {
                println!("  [{}] {}", issue.kind, issue.message);
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Validation failed"))
        }
    }
}
