//! Ready-made keys and documents.

use crate::models::action::{Action, LongpressActions};
use crate::models::document::{Custard, Metadata};
use crate::models::enums::{FlickDirection, InputStyle, KeyColor, KeyStyle, Language, SystemKey};
use crate::models::interface::{Interface, KeyLayout};
use crate::models::key::{CustomKey, KeyDesign, Variation, VariationKey};
use crate::models::specifier::Specifier;

/// Flick key that inputs `center` on tap and each flick's text on flick.
pub fn flick_key<S: Into<String>>(
    center: impl Into<String>,
    flicks: impl IntoIterator<Item = (FlickDirection, S)>,
) -> CustomKey {
    let center = center.into();
    let mut key = CustomKey::new(KeyDesign::text(center.clone()))
        .with_press_actions(vec![Action::Input(center)]);
    for (direction, text) in flicks {
        key = key.with_variation(Variation::flick(direction, VariationKey::input(text)));
    }
    key
}

/// Backspace-style key: deletes one character, repeats while held.
#[must_use]
pub fn delete_key() -> CustomKey {
    CustomKey::new(KeyDesign::system_image("delete.left").with_color(KeyColor::Special))
        .with_press_actions(vec![Action::Delete(1)])
        .with_longpress_actions(LongpressActions::new(vec![], vec![Action::Delete(1)]))
}

/// Small 2×2 sample document: a globe key, a delete key and two flick keys.
pub fn sample_custard(
    identifier: impl Into<String>,
    display_name: impl Into<String>,
    language: Language,
    input_style: InputStyle,
) -> Custard {
    let interface = Interface::new(
        KeyStyle::TenkeyStyle,
        KeyLayout::GridFit {
            row_count: 2,
            column_count: 2,
        },
    )
    .with_key(Specifier::grid_fit(0, 0), SystemKey::ChangeKeyboard)
    .with_key(
        Specifier::grid_fit(0, 1),
        flick_key(
            "あ",
            [
                (FlickDirection::Left, "い"),
                (FlickDirection::Top, "う"),
                (FlickDirection::Right, "え"),
                (FlickDirection::Bottom, "お"),
            ],
        ),
    )
    .with_key(
        Specifier::grid_fit(1, 0),
        flick_key("か", [(FlickDirection::Left, "き"), (FlickDirection::Top, "く")]),
    )
    .with_key(Specifier::grid_fit(1, 1), delete_key());

    Custard::new(
        identifier,
        language,
        input_style,
        Metadata::new(display_name),
        interface,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::key::InterfaceKey;

    #[test]
    fn test_flick_key_variations_in_order() {
        let key = flick_key("さ", [(FlickDirection::Left, "し"), (FlickDirection::Right, "せ")]);
        assert_eq!(key.press_actions, vec![Action::input("さ")]);
        assert_eq!(key.variations.len(), 2);
        assert_eq!(key.variations[1].key.press_actions, vec![Action::input("せ")]);
    }

    #[test]
    fn test_sample_custard_shape() {
        let doc = sample_custard("sample", "Sample", Language::JaJp, InputStyle::Direct);
        assert_eq!(doc.metadata.custard_version, "1.0");
        assert_eq!(doc.interface.key_count(), 4);
        assert_eq!(
            doc.interface.key_at(&Specifier::grid_fit(0, 0)),
            Some(&InterfaceKey::System(SystemKey::ChangeKeyboard))
        );
    }
}
