//! Document-level encoding and the version check.

use crate::codec::key::{decode_interface, encode_interface};
use crate::codec::reader::{join, Record};
use crate::codec::DecodeOptions;
use crate::constants::CUSTARD_VERSION;
use crate::error::{CustardError, Result};
use crate::models::{Custard, Metadata, WireEnum};
use serde_json::{json, Value};
use tracing::debug;

/// Encodes a document: metadata fields first, then the interface.
pub fn encode_document(document: &Custard) -> Result<Value> {
    let interface = encode_interface(&document.interface, "interface")?;
    Ok(json!({
        "identifier": document.identifier,
        "language": document.language.as_wire(),
        "input_style": document.input_style.as_wire(),
        "metadata": {
            "custard_version": document.metadata.custard_version,
            "display_name": document.metadata.display_name,
        },
        "interface": interface,
    }))
}

/// Decodes a document, checking the format version before anything else.
pub fn decode_document(value: &Value, options: &DecodeOptions) -> Result<Custard> {
    let root = Record::new(value, "")?;

    let metadata_path = root.field_path("metadata");
    let metadata = Record::new(root.value("metadata")?, &metadata_path)?;
    let version = metadata.str("custard_version")?;
    if version != CUSTARD_VERSION {
        return Err(CustardError::UnsupportedVersion {
            found: version.to_string(),
        });
    }

    let identifier = root.str("identifier")?.to_string();
    let language = root.wire_enum("language")?;
    let input_style = root.wire_enum("input_style")?;
    let display_name = metadata.str("display_name")?.to_string();
    let interface = decode_interface(
        root.value("interface")?,
        &join(root.path(), "interface"),
        options,
    )?;

    debug!(identifier = %identifier, keys = interface.keys.len(), "decoded document");

    Ok(Custard {
        identifier,
        language,
        input_style,
        metadata: Metadata {
            custard_version: version.to_string(),
            display_name,
        },
        interface,
    })
}
