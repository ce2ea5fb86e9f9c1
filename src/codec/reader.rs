//! Typed field access over a JSON object, tracking the field path for errors.

use crate::error::{CustardError, Result};
use crate::models::WireEnum;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Joins a parent path and a field name.
pub(crate) fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Appends an array index to a path.
pub(crate) fn index(parent: &str, idx: usize) -> String {
    format!("{parent}[{idx}]")
}

/// A JSON object being decoded, together with its location in the document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record<'a> {
    fields: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Record<'a> {
    /// Views `value` as an object.
    pub(crate) fn new(value: &'a Value, path: &'a str) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields, path }),
            _ => Err(CustardError::invalid(describe(path), "an object")),
        }
    }

    /// Path of this record.
    pub(crate) const fn path(&self) -> &'a str {
        self.path
    }

    /// Path of a field in this record.
    pub(crate) fn field_path(&self, name: &str) -> String {
        join(self.path, name)
    }

    /// Returns true if the field is present (even if `null`).
    pub(crate) fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Raw value of a field, if present.
    pub(crate) fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    /// Raw value of a required field.
    pub(crate) fn value(&self, name: &str) -> Result<&'a Value> {
        self.fields
            .get(name)
            .ok_or_else(|| CustardError::missing(self.field_path(name)))
    }

    /// Required string field.
    pub(crate) fn str(&self, name: &str) -> Result<&'a str> {
        self.value(name)?
            .as_str()
            .ok_or_else(|| CustardError::invalid(self.field_path(name), "a string"))
    }

    /// Required integer field.
    pub(crate) fn i64(&self, name: &str) -> Result<i64> {
        self.value(name)?
            .as_i64()
            .ok_or_else(|| CustardError::invalid(self.field_path(name), "an integer"))
    }

    /// Optional integer field; `None` when absent.
    pub(crate) fn opt_i64(&self, name: &str) -> Result<Option<i64>> {
        if self.has(name) {
            self.i64(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Required real-number field (integers are accepted).
    pub(crate) fn f64(&self, name: &str) -> Result<f64> {
        self.value(name)?
            .as_f64()
            .ok_or_else(|| CustardError::invalid(self.field_path(name), "a number"))
    }

    /// Required array field.
    pub(crate) fn array(&self, name: &str) -> Result<&'a [Value]> {
        self.value(name)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| CustardError::invalid(self.field_path(name), "an array"))
    }

    /// Required array of strings.
    pub(crate) fn strings(&self, name: &str) -> Result<Vec<String>> {
        let path = self.field_path(name);
        self.array(name)?
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| CustardError::invalid(index(&path, idx), "a string"))
            })
            .collect()
    }

    /// Required object of string → string.
    pub(crate) fn string_table(&self, name: &str) -> Result<BTreeMap<String, String>> {
        let path = self.field_path(name);
        let table = self
            .value(name)?
            .as_object()
            .ok_or_else(|| CustardError::invalid(path.clone(), "an object"))?;
        table
            .iter()
            .map(|(k, v)| {
                v.as_str()
                    .map(|s| (k.clone(), s.to_string()))
                    .ok_or_else(|| CustardError::invalid(join(&path, k), "a string"))
            })
            .collect()
    }

    /// Required fixed-vocabulary field.
    pub(crate) fn wire_enum<E: WireEnum>(&self, name: &str) -> Result<E> {
        let raw = self.str(name)?;
        E::from_wire(raw).ok_or_else(|| CustardError::UnknownVariant {
            field: self.field_path(name),
            value: raw.to_string(),
        })
    }
}

fn describe(path: &str) -> &str {
    if path.is_empty() {
        "<document>"
    } else {
        path
    }
}
