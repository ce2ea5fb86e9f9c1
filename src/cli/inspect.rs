//! Summary listing of a document's metadata and keys.

use crate::cli::common::{load_config, print_json, read_document_bytes, CliError, CliResult};
use crate::codec::{self, key, specifier};
use crate::models::{Custard, InterfaceKey, KeyLabel, KeyLayout, Specifier, WireEnum};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Show a document's metadata and key list
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the document
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectOutput {
    identifier: String,
    display_name: String,
    custard_version: String,
    language: &'static str,
    input_style: &'static str,
    key_style: &'static str,
    layout: String,
    keys: Vec<KeyEntry>,
}

#[derive(Debug, Serialize)]
struct KeyEntry {
    specifier_type: &'static str,
    specifier: Value,
    key_type: &'static str,
    summary: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let bytes = read_document_bytes(&self.file)?;
        let document = codec::decode_with(&bytes, &load_config().decode_options())
            .map_err(|e| CliError::validation(format!("{}: {e}", self.file.display())))?;

        let output = build_output(&document);

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} ({})", output.identifier, output.display_name);
            println!("  Version:     {}", output.custard_version);
            println!("  Language:    {}", output.language);
            println!("  Input style: {}", output.input_style);
            println!("  Key style:   {}", output.key_style);
            println!("  Layout:      {}", output.layout);
            println!("  Keys ({}):", output.keys.len());
            for (spec, entry) in document.interface.keys.keys().zip(&output.keys) {
                println!(
                    "    {:<22} {:<7} {}",
                    describe_specifier(spec),
                    entry.key_type,
                    entry.summary
                );
            }
        }

        Ok(())
    }
}

fn build_output(document: &Custard) -> InspectOutput {
    let keys = document
        .interface
        .keys
        .iter()
        .map(|(spec, interface_key)| {
            let (specifier_type, specifier) = specifier::encode(spec);
            let (key_type, _) = key::encode_key(interface_key);
            KeyEntry {
                specifier_type,
                specifier,
                key_type,
                summary: summarize_key(interface_key),
            }
        })
        .collect();

    InspectOutput {
        identifier: document.identifier.clone(),
        display_name: document.metadata.display_name.clone(),
        custard_version: document.metadata.custard_version.clone(),
        language: document.language.as_wire(),
        input_style: document.input_style.as_wire(),
        key_style: document.interface.key_style.as_wire(),
        layout: describe_layout(&document.interface.key_layout),
        keys,
    }
}

fn describe_layout(layout: &KeyLayout) -> String {
    match layout {
        KeyLayout::GridFit {
            row_count,
            column_count,
        } => format!("grid_fit {row_count} rows × {column_count} columns"),
        KeyLayout::GridScroll {
            direction,
            row_count,
            column_count,
        } => format!("grid_scroll ({direction}) {row_count} rows × {column_count} columns"),
    }
}

fn describe_specifier(spec: &Specifier) -> String {
    match spec {
        Specifier::GridFit(fit) => format!(
            "grid_fit ({},{}) {}×{}",
            fit.x, fit.y, fit.width, fit.height
        ),
        Specifier::GridScroll(scroll) => format!("grid_scroll #{}", scroll.index),
    }
}

fn summarize_key(key: &InterfaceKey) -> String {
    match key {
        InterfaceKey::System(system) => system.as_wire().to_string(),
        InterfaceKey::Custom(custom) => {
            let label = match &custom.design.label {
                KeyLabel::Text(text) => format!("\"{}\"", text.escape_debug()),
                KeyLabel::SystemImage(name) => format!("<{name}>"),
            };
            format!(
                "{label} {} press, {} variations",
                custom.press_actions.len(),
                custom.variations.len()
            )
        }
    }
}
