//! Data model for Custard documents.
//!
//! All types are plain values: built once (by hand, by a preset, or by the
//! codec) and then encoded or consumed. Nothing here knows about JSON.

pub mod action;
pub mod document;
pub mod enums;
pub mod interface;
pub mod key;
pub mod presets;
pub mod specifier;

// Re-export all model types
pub use action::{Action, LongpressActions, TabTarget, DEFAULT_SCAN_TARGETS};
pub use document::{Custard, Metadata};
pub use enums::{
    FlickDirection, InputStyle, KeyColor, KeyStyle, Language, ScanDirection, ScrollDirection,
    SystemKey, SystemTab, WireEnum,
};
pub use interface::{Interface, KeyLayout};
pub use key::{
    CustomKey, InterfaceKey, KeyDesign, KeyLabel, Variation, VariationDesign, VariationKey,
    VariationType,
};
pub use specifier::{GridFitSpecifier, GridScrollSpecifier, Specifier};
