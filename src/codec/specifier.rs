//! Position specifier encoding.
//!
//! A specifier is written as a discriminant (`grid_fit` | `grid_scroll`)
//! stored next to its payload object by the enclosing key record.

use crate::codec::reader::{join, Record};
use crate::error::{CustardError, Result};
use crate::models::{GridFitSpecifier, GridScrollSpecifier, Specifier};
use serde_json::{json, Value};

/// Discriminant of fixed-grid specifiers.
pub const GRID_FIT: &str = "grid_fit";
/// Discriminant of scroll specifiers.
pub const GRID_SCROLL: &str = "grid_scroll";

/// Returns the discriminant and payload for a specifier.
pub fn encode(specifier: &Specifier) -> (&'static str, Value) {
    match specifier {
        Specifier::GridFit(spec) => (
            GRID_FIT,
            json!({
                "x": spec.x,
                "y": spec.y,
                "width": spec.width,
                "height": spec.height,
            }),
        ),
        Specifier::GridScroll(spec) => (GRID_SCROLL, json!({ "index": spec.index })),
    }
}

/// Decodes a specifier from its discriminant and payload.
///
/// `path` is the key record holding both fields. Any problem with either
/// is reported as [`CustardError::MalformedSpecifier`].
pub fn decode(discriminant: Option<&Value>, payload: Option<&Value>, path: &str) -> Result<Specifier> {
    let tag = match discriminant {
        Some(Value::String(tag)) => tag.as_str(),
        Some(_) => {
            return Err(CustardError::malformed_specifier(path, "specifier_type is not a string"))
        }
        None => return Err(CustardError::malformed_specifier(path, "missing specifier_type")),
    };
    let payload =
        payload.ok_or_else(|| CustardError::malformed_specifier(path, "missing specifier"))?;

    let payload_path = join(path, "specifier");
    let decoded = match tag {
        GRID_FIT => decode_grid_fit(payload, &payload_path).map(Specifier::GridFit),
        GRID_SCROLL => decode_grid_scroll(payload, &payload_path).map(Specifier::GridScroll),
        other => {
            return Err(CustardError::malformed_specifier(
                path,
                format!("unknown specifier_type '{other}'"),
            ))
        }
    };
    decoded.map_err(|err| match err {
        CustardError::MalformedSpecifier { .. } => err,
        other => CustardError::malformed_specifier(path, other.to_string()),
    })
}

/// Reads a fixed-grid payload and normalizes its size.
fn decode_grid_fit(payload: &Value, path: &str) -> Result<GridFitSpecifier> {
    let record = Record::new(payload, path)?;
    let raw = GridFitSpecifier {
        x: record.i64("x")?,
        y: record.i64("y")?,
        width: record.opt_i64("width")?.unwrap_or(1),
        height: record.opt_i64("height")?.unwrap_or(1),
    };
    // Sizes are magnitudes; a negative width or height is read as its absolute value.
    raw.normalized()
        .ok_or_else(|| CustardError::malformed_specifier(path, "width or height out of range"))
}

fn decode_grid_scroll(payload: &Value, path: &str) -> Result<GridScrollSpecifier> {
    let record = Record::new(payload, path)?;
    Ok(GridScrollSpecifier {
        index: record.i64("index")?,
    })
}
