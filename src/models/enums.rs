//! Fixed string-coded vocabularies used by Custard documents.
//!
//! Every enumeration here is a closed set with a stable wire string per
//! variant. Decoding an unrecognized string fails with
//! [`CustardError::UnknownVariant`].

use crate::error::CustardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bidirectional mapping between a closed enumeration and its wire strings.
pub trait WireEnum: Sized + Copy + 'static {
    /// Vocabulary name used in error messages.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Wire string for this variant.
    fn as_wire(self) -> &'static str;

    /// Looks up a variant by its wire string.
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_wire() == value)
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $label:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl WireEnum for $name {
            const NAME: &'static str = $label;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl FromStr for $name {
            type Err = CustardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| CustardError::UnknownVariant {
                    field: $label.to_string(),
                    value: s.to_string(),
                })
            }
        }
    };
}

wire_enum! {
    /// Conversion language the keyboard targets.
    pub enum Language as "language" {
        /// Japanese
        JaJp => "ja_JP",
        /// English (US)
        EnUs => "en_US",
        /// Greek
        ElGr => "el_GR",
        /// Raw input, no conversion
        None => "none",
        /// Keep whatever language the previous keyboard used
        Undefined => "undefined",
    }
}

wire_enum! {
    /// How typed characters reach the conversion engine.
    pub enum InputStyle as "input_style" {
        /// Characters are passed through as typed
        Direct => "direct",
        /// Latin input is transliterated to kana
        Roman2Kana => "roman2kana",
    }
}

wire_enum! {
    /// Interaction style of an interface's keys.
    pub enum KeyStyle as "key_style" {
        /// Flick keys (variations reached by swiping)
        TenkeyStyle => "tenkey_style",
        /// Press-and-hold keys (variations reached by long-press selection)
        PcStyle => "pc_style",
    }
}

wire_enum! {
    /// Direction of a flick variation.
    pub enum FlickDirection as "direction" {
        /// Swipe left
        Left => "left",
        /// Swipe up
        Top => "top",
        /// Swipe right
        Right => "right",
        /// Swipe down
        Bottom => "bottom",
    }
}

wire_enum! {
    /// Scan direction for smart delete / smart cursor movement.
    #[derive(Default)]
    pub enum ScanDirection as "direction" {
        /// Toward the end of the text
        #[default]
        Forward => "forward",
        /// Toward the start of the text
        Backward => "backward",
    }
}

wire_enum! {
    /// Scroll axis of a scrollable grid layout.
    pub enum ScrollDirection as "direction" {
        /// Scrolls top to bottom
        Vertical => "vertical",
        /// Scrolls left to right
        Horizontal => "horizontal",
    }
}

wire_enum! {
    /// Color role of a custom key.
    #[derive(Default)]
    pub enum KeyColor as "color" {
        /// Regular character key
        #[default]
        Normal => "normal",
        /// Function key (enter, delete, ...)
        Special => "special",
        /// Highlighted key
        Selected => "selected",
    }
}

wire_enum! {
    /// Built-in tabs a `move_tab` action can target.
    pub enum SystemTab as "identifier" {
        /// User's preferred Japanese tab
        UserJapanese => "user_japanese",
        /// User's preferred English tab
        UserEnglish => "user_english",
        /// Flick kana tab
        FlickJapanese => "flick_japanese",
        /// Flick alphabet tab
        FlickEnglish => "flick_english",
        /// Flick numbers and symbols tab
        FlickNumberSymbols => "flick_numbersymbols",
        /// QWERTY kana tab
        QwertyJapanese => "qwerty_japanese",
        /// QWERTY alphabet tab
        QwertyEnglish => "qwerty_english",
        /// QWERTY numbers tab
        QwertyNumber => "qwerty_number",
        /// QWERTY symbols tab
        QwertySymbols => "qwerty_symbols",
        /// The tab shown before the current one
        LastTab => "last_tab",
        /// Clipboard history
        ClipboardHistoryTab => "clipboard_history_tab",
    }
}

wire_enum! {
    /// Keys whose appearance and behavior are supplied by the host keyboard.
    pub enum SystemKey as "type" {
        /// Globe / keyboard switcher
        ChangeKeyboard => "change_keyboard",
        /// Enter key
        Enter => "enter",
        /// Shift / caps toggle
        UpperLower => "upper_lower",
        /// Next conversion candidate
        NextCandidate => "next_candidate",
        /// Small-kana toggle for flick layouts
        FlickKogaki => "flick_kogaki",
        /// Punctuation key for flick layouts
        FlickKutoten => "flick_kutoten",
        /// Kana tab switch for flick layouts
        FlickHiraTab => "flick_hira_tab",
        /// Alphabet tab switch for flick layouts
        FlickAbcTab => "flick_abc_tab",
        /// Symbols tab switch for flick layouts
        FlickStar123Tab => "flick_star123_tab",
    }
}
