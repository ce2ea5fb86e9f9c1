//! Interface: key style, layout and the specifier → key mapping.

use crate::models::enums::{KeyStyle, ScrollDirection};
use crate::models::key::InterfaceKey;
use crate::models::specifier::Specifier;
use std::collections::BTreeMap;

/// Grid the keys are laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyLayout {
    /// Fixed grid of integer size
    GridFit {
        /// Number of rows
        row_count: i64,
        /// Number of columns
        column_count: i64,
    },
    /// Scrollable grid; counts may be fractional
    GridScroll {
        /// Scroll axis
        direction: ScrollDirection,
        /// Visible rows
        row_count: f64,
        /// Visible columns
        column_count: f64,
    },
}

/// The key-layout and key-behavior portion of a document.
///
/// Keys are unique per specifier; the map's ordering only fixes the order
/// in which records are written.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    /// Interaction style
    pub key_style: KeyStyle,
    /// Grid
    pub key_layout: KeyLayout,
    /// Keys by position
    pub keys: BTreeMap<Specifier, InterfaceKey>,
}

impl Interface {
    /// Interface with no keys.
    #[must_use]
    pub const fn new(key_style: KeyStyle, key_layout: KeyLayout) -> Self {
        Self {
            key_style,
            key_layout,
            keys: BTreeMap::new(),
        }
    }

    /// Places a key, replacing any key already at that specifier.
    #[must_use]
    pub fn with_key(mut self, specifier: impl Into<Specifier>, key: impl Into<InterfaceKey>) -> Self {
        self.keys.insert(specifier.into(), key.into());
        self
    }

    /// Looks up the key at a specifier.
    #[must_use]
    pub fn key_at(&self, specifier: &Specifier) -> Option<&InterfaceKey> {
        self.keys.get(specifier)
    }

    /// Number of placed keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
