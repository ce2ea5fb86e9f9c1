//! Key definitions: system keys, custom keys and their variations.

use crate::models::action::{Action, LongpressActions};
use crate::models::enums::{FlickDirection, KeyColor, SystemKey};

/// What is drawn on a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyLabel {
    /// Literal text
    Text(String),
    /// Named glyph supplied by the host (e.g. `"list.bullet"`)
    SystemImage(String),
}

/// Appearance of a custom key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDesign {
    /// Label drawn on the key
    pub label: KeyLabel,
    /// Color role
    pub color: KeyColor,
}

impl KeyDesign {
    /// Text label with the normal color.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            label: KeyLabel::Text(text.into()),
            color: KeyColor::Normal,
        }
    }

    /// Glyph label with the normal color.
    pub fn system_image(name: impl Into<String>) -> Self {
        Self {
            label: KeyLabel::SystemImage(name.into()),
            color: KeyColor::Normal,
        }
    }

    /// Sets the color role.
    #[must_use]
    pub fn with_color(mut self, color: KeyColor) -> Self {
        self.color = color;
        self
    }
}

/// Appearance of a variation (variations have no color of their own).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationDesign {
    /// Label drawn for the variation
    pub label: KeyLabel,
}

impl VariationDesign {
    /// Text label.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            label: KeyLabel::Text(text.into()),
        }
    }
}

/// Behavior reached through a variation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationKey {
    /// Appearance
    pub design: VariationDesign,
    /// Fired on release
    pub press_actions: Vec<Action>,
    /// Fired while held
    pub longpress_actions: LongpressActions,
}

impl VariationKey {
    /// Variation that inputs its own label text.
    pub fn input(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            design: VariationDesign::text(text.clone()),
            press_actions: vec![Action::Input(text)],
            longpress_actions: LongpressActions::none(),
        }
    }
}

/// How a variation is reached from its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariationType {
    /// Flick in a direction
    Flick(FlickDirection),
    /// Long-press and select
    Longpress,
}

/// An alternate action set reachable from a custom key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    /// Trigger
    pub kind: VariationType,
    /// Payload
    pub key: VariationKey,
}

impl Variation {
    /// Flick variation.
    #[must_use]
    pub const fn flick(direction: FlickDirection, key: VariationKey) -> Self {
        Self {
            kind: VariationType::Flick(direction),
            key,
        }
    }

    /// Long-press selection variation.
    #[must_use]
    pub const fn longpress(key: VariationKey) -> Self {
        Self {
            kind: VariationType::Longpress,
            key,
        }
    }
}

/// A key defined entirely by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomKey {
    /// Appearance
    pub design: KeyDesign,
    /// Fired on release, in order
    pub press_actions: Vec<Action>,
    /// Fired while held
    pub longpress_actions: LongpressActions,
    /// Alternates, in order
    pub variations: Vec<Variation>,
}

impl CustomKey {
    /// Key with the given design and no behavior yet.
    #[must_use]
    pub const fn new(design: KeyDesign) -> Self {
        Self {
            design,
            press_actions: Vec::new(),
            longpress_actions: LongpressActions::none(),
            variations: Vec::new(),
        }
    }

    /// Sets the press actions.
    #[must_use]
    pub fn with_press_actions(mut self, actions: Vec<Action>) -> Self {
        self.press_actions = actions;
        self
    }

    /// Sets the long-press bundle.
    #[must_use]
    pub fn with_longpress_actions(mut self, actions: LongpressActions) -> Self {
        self.longpress_actions = actions;
        self
    }

    /// Appends a variation.
    #[must_use]
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }
}

/// A key placed in an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceKey {
    /// Host-provided key
    System(SystemKey),
    /// Document-defined key
    Custom(CustomKey),
}

impl From<SystemKey> for InterfaceKey {
    fn from(value: SystemKey) -> Self {
        Self::System(value)
    }
}

impl From<CustomKey> for InterfaceKey {
    fn from(value: CustomKey) -> Self {
        Self::Custom(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_key_builder() {
        let key = CustomKey::new(KeyDesign::text("あ").with_color(KeyColor::Special))
            .with_press_actions(vec![Action::input("あ")])
            .with_variation(Variation::flick(FlickDirection::Left, VariationKey::input("い")));

        assert_eq!(key.design.color, KeyColor::Special);
        assert_eq!(key.press_actions.len(), 1);
        assert_eq!(key.variations.len(), 1);
        assert_eq!(key.variations[0].kind, VariationType::Flick(FlickDirection::Left));
        assert!(key.longpress_actions.is_empty());
    }

    #[test]
    fn test_variation_input_uses_label_text() {
        let key = VariationKey::input("う");
        assert_eq!(key.design.label, KeyLabel::Text("う".to_string()));
        assert_eq!(key.press_actions, vec![Action::input("う")]);
    }
}
