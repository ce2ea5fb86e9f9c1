//! Key, variation, layout and interface encoding.
//!
//! The interface's keys are a map keyed by [`Specifier`], which JSON cannot
//! use as an object key. On the wire the map becomes a list of records:
//!
//! ```json
//! {"specifier_type": "grid_fit", "specifier": {"x": 0, "y": 0, "width": 1, "height": 1},
//!  "key_type": "custom", "key": {"design": ..., "press_actions": [...], ...}}
//! ```
//!
//! Decoding inserts records in order, so a later record with an equal
//! (normalized) specifier replaces an earlier one unless
//! [`DuplicatePolicy::Reject`] is in effect.

use crate::codec::reader::{index, join, Record};
use crate::codec::{action, specifier, DecodeOptions, DuplicatePolicy};
use crate::error::{CustardError, Result};
use crate::models::{
    CustomKey, FlickDirection, Interface, InterfaceKey, KeyDesign, KeyLabel, KeyLayout, Specifier,
    SystemKey, Variation, VariationDesign, VariationKey, VariationType, WireEnum,
};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const KEY_SYSTEM: &str = "system";
const KEY_CUSTOM: &str = "custom";
const FLICK_VARIATION: &str = "flick_variation";
const LONGPRESS_VARIATION: &str = "longpress_variation";
const LAYOUT_GRID_FIT: &str = "grid_fit";
const LAYOUT_GRID_SCROLL: &str = "grid_scroll";

// ---------------------------------------------------------------------------
// Labels and designs
// ---------------------------------------------------------------------------

fn encode_label(label: &KeyLabel) -> Value {
    match label {
        KeyLabel::Text(text) => json!({ "text": text }),
        KeyLabel::SystemImage(name) => json!({ "system_image": name }),
    }
}

fn decode_label(record: &Record<'_>, name: &str) -> Result<KeyLabel> {
    let path = join(record.path(), name);
    let label = Record::new(record.value(name)?, &path)?;
    if label.has("text") {
        Ok(KeyLabel::Text(label.str("text")?.to_string()))
    } else if label.has("system_image") {
        Ok(KeyLabel::SystemImage(label.str("system_image")?.to_string()))
    } else {
        Err(CustardError::missing(join(&path, "text")))
    }
}

fn encode_design(design: &KeyDesign) -> Value {
    json!({
        "label": encode_label(&design.label),
        "color": design.color.as_wire(),
    })
}

fn decode_design(record: &Record<'_>) -> Result<KeyDesign> {
    let path = record.field_path("design");
    let design = Record::new(record.value("design")?, &path)?;
    Ok(KeyDesign {
        label: decode_label(&design, "label")?,
        color: design.wire_enum("color")?,
    })
}

fn decode_variation_design(record: &Record<'_>) -> Result<VariationDesign> {
    let path = record.field_path("design");
    let design = Record::new(record.value("design")?, &path)?;
    Ok(VariationDesign {
        label: decode_label(&design, "label")?,
    })
}

// ---------------------------------------------------------------------------
// Variations
// ---------------------------------------------------------------------------

fn encode_variation_key(key: &VariationKey) -> Value {
    json!({
        "design": { "label": encode_label(&key.design.label) },
        "press_actions": action::encode_list(&key.press_actions),
        "longpress_actions": action::encode_longpress(&key.longpress_actions),
    })
}

fn decode_variation_key(value: &Value, path: &str) -> Result<VariationKey> {
    let record = Record::new(value, path)?;
    Ok(VariationKey {
        design: decode_variation_design(&record)?,
        press_actions: action::decode_list(&record, "press_actions")?,
        longpress_actions: action::decode_longpress(&record, "longpress_actions")?,
    })
}

fn encode_variation(variation: &Variation) -> Value {
    let mut record = Map::new();
    match variation.kind {
        VariationType::Flick(direction) => {
            record.insert("type".to_string(), Value::from(FLICK_VARIATION));
            record.insert("direction".to_string(), Value::from(direction.as_wire()));
        }
        VariationType::Longpress => {
            record.insert("type".to_string(), Value::from(LONGPRESS_VARIATION));
        }
    }
    record.insert("key".to_string(), encode_variation_key(&variation.key));
    Value::Object(record)
}

fn decode_variation(value: &Value, path: &str) -> Result<Variation> {
    let record = Record::new(value, path)?;
    let kind = match record.str("type")? {
        FLICK_VARIATION => VariationType::Flick(record.wire_enum::<FlickDirection>("direction")?),
        LONGPRESS_VARIATION => VariationType::Longpress,
        other => {
            return Err(CustardError::UnknownVariationType {
                path: record.field_path("type"),
                value: other.to_string(),
            })
        }
    };
    let key = decode_variation_key(record.value("key")?, &record.field_path("key"))?;
    Ok(Variation { kind, key })
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

fn encode_custom_key(key: &CustomKey) -> Value {
    json!({
        "design": encode_design(&key.design),
        "press_actions": action::encode_list(&key.press_actions),
        "longpress_actions": action::encode_longpress(&key.longpress_actions),
        "variations": key.variations.iter().map(encode_variation).collect::<Vec<_>>(),
    })
}

fn decode_custom_key(value: &Value, path: &str) -> Result<CustomKey> {
    let record = Record::new(value, path)?;
    let design = decode_design(&record)?;
    let press_actions = action::decode_list(&record, "press_actions")?;
    let longpress_actions = action::decode_longpress(&record, "longpress_actions")?;

    let variations_path = record.field_path("variations");
    let variations = record
        .array("variations")?
        .iter()
        .enumerate()
        .map(|(idx, item)| decode_variation(item, &index(&variations_path, idx)))
        .collect::<Result<Vec<_>>>()?;

    Ok(CustomKey {
        design,
        press_actions,
        longpress_actions,
        variations,
    })
}

/// Returns the `key_type` discriminant and payload for a key.
pub fn encode_key(key: &InterfaceKey) -> (&'static str, Value) {
    match key {
        InterfaceKey::System(system) => (KEY_SYSTEM, json!({ "type": system.as_wire() })),
        InterfaceKey::Custom(custom) => (KEY_CUSTOM, encode_custom_key(custom)),
    }
}

/// Decodes a key given its `key_type` discriminant and payload.
pub(crate) fn decode_key(key_type: &str, payload: &Value, record: &Record<'_>) -> Result<InterfaceKey> {
    let path = record.field_path("key");
    match key_type {
        KEY_SYSTEM => {
            let system = Record::new(payload, &path)?;
            Ok(InterfaceKey::System(system.wire_enum::<SystemKey>("type")?))
        }
        KEY_CUSTOM => decode_custom_key(payload, &path).map(InterfaceKey::Custom),
        other => Err(CustardError::UnknownKeyType {
            path: record.field_path("key_type"),
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Key records
// ---------------------------------------------------------------------------

/// Linearizes the key map into one record per entry.
pub fn encode_key_records(keys: &BTreeMap<Specifier, InterfaceKey>) -> Value {
    let records = keys
        .iter()
        .map(|(spec, key)| {
            let (specifier_type, specifier_payload) = specifier::encode(spec);
            let (key_type, key_payload) = encode_key(key);
            json!({
                "specifier_type": specifier_type,
                "specifier": specifier_payload,
                "key_type": key_type,
                "key": key_payload,
            })
        })
        .collect();
    Value::Array(records)
}

/// Rebuilds the key map from its record list.
pub fn decode_key_records(
    records: &[Value],
    path: &str,
    options: &DecodeOptions,
) -> Result<BTreeMap<Specifier, InterfaceKey>> {
    let mut keys = BTreeMap::new();
    for (idx, value) in records.iter().enumerate() {
        let record_path = index(path, idx);
        let record = Record::new(value, &record_path)?;

        let spec = specifier::decode(
            record.get("specifier_type"),
            record.get("specifier"),
            &record_path,
        )?;
        let key_type = record.str("key_type")?;
        let key = decode_key(key_type, record.value("key")?, &record)?;

        if keys.insert(spec, key).is_some() {
            match options.duplicate_specifiers {
                DuplicatePolicy::LastWins => {
                    warn!(path = %record_path, "key record replaces an earlier key at the same position");
                }
                DuplicatePolicy::Reject => {
                    return Err(CustardError::DuplicateSpecifier { path: record_path });
                }
            }
        }
    }
    Ok(keys)
}

// ---------------------------------------------------------------------------
// Layout and interface
// ---------------------------------------------------------------------------

/// Scroll counts are written only when finite; JSON cannot carry NaN or infinity.
fn finite_count(value: f64, path: &str, name: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CustardError::invalid(join(path, name), "a finite number"))
    }
}

fn encode_layout(layout: &KeyLayout, path: &str) -> Result<Value> {
    let value = match layout {
        KeyLayout::GridFit {
            row_count,
            column_count,
        } => json!({
            "type": LAYOUT_GRID_FIT,
            "row_count": row_count,
            "column_count": column_count,
        }),
        KeyLayout::GridScroll {
            direction,
            row_count,
            column_count,
        } => json!({
            "type": LAYOUT_GRID_SCROLL,
            "direction": direction.as_wire(),
            "row_count": finite_count(*row_count, path, "row_count")?,
            "column_count": finite_count(*column_count, path, "column_count")?,
        }),
    };
    Ok(value)
}

fn decode_layout(record: &Record<'_>) -> Result<KeyLayout> {
    let path = record.field_path("key_layout");
    let layout = Record::new(record.value("key_layout")?, &path)?;
    match layout.str("type")? {
        LAYOUT_GRID_FIT => Ok(KeyLayout::GridFit {
            row_count: layout.i64("row_count")?,
            column_count: layout.i64("column_count")?,
        }),
        LAYOUT_GRID_SCROLL => Ok(KeyLayout::GridScroll {
            direction: layout.wire_enum("direction")?,
            row_count: layout.f64("row_count")?,
            column_count: layout.f64("column_count")?,
        }),
        other => Err(CustardError::UnknownLayoutType {
            path: layout.field_path("type"),
            value: other.to_string(),
        }),
    }
}

/// Encodes an interface: key style, layout, then the key records.
///
/// `path` locates the interface in the document for error reporting.
pub fn encode_interface(interface: &Interface, path: &str) -> Result<Value> {
    let key_layout = encode_layout(&interface.key_layout, &join(path, "key_layout"))?;
    Ok(json!({
        "key_style": interface.key_style.as_wire(),
        "key_layout": key_layout,
        "keys": encode_key_records(&interface.keys),
    }))
}

/// Decodes an interface.
pub fn decode_interface(value: &Value, path: &str, options: &DecodeOptions) -> Result<Interface> {
    let record = Record::new(value, path)?;
    let key_style = record.wire_enum("key_style")?;
    let key_layout = decode_layout(&record)?;
    let keys_path = record.field_path("keys");
    let records = record.array("keys")?;
    let keys = decode_key_records(records, &keys_path, options)?;

    debug!(
        records = records.len(),
        keys = keys.len(),
        "decoded interface"
    );

    Ok(Interface {
        key_style,
        key_layout,
        keys,
    })
}
