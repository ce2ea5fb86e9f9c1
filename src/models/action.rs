//! Input actions triggered by keys and key variations.

use crate::models::enums::{ScanDirection, SystemTab};
use std::collections::BTreeMap;

/// Characters a smart delete / smart cursor move stops at when none are given.
pub const DEFAULT_SCAN_TARGETS: [&str; 9] = ["、", "。", "！", "？", ".", ",", "．", "，", "\n"];

/// Target of a `move_tab` action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabTarget {
    /// One of the built-in tabs
    System(SystemTab),
    /// A custom tab, by its document identifier
    Custom(String),
}

/// One thing a key does when triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert literal text
    Input(String),
    /// Apply the host's default character substitution (dakuten, small kana, ...)
    ReplaceDefault,
    /// Replace trailing characters using a lookup table
    ReplaceLastCharacters(BTreeMap<String, String>),
    /// Delete `count` characters (negative deletes forward)
    Delete(i64),
    /// Delete up to the first target character in `direction`
    SmartDelete {
        /// Scan direction
        direction: ScanDirection,
        /// Characters that stop the scan
        targets: Vec<String>,
    },
    /// Host's default "delete to sentence start"
    SmartDeleteDefault,
    /// Confirm the current composition
    Complete,
    /// Move the cursor by `count` characters (negative moves backward)
    MoveCursor(i64),
    /// Move the cursor up to the first target character in `direction`
    SmartMoveCursor {
        /// Scan direction
        direction: ScanDirection,
        /// Characters that stop the scan
        targets: Vec<String>,
    },
    /// Switch to another tab
    MoveTab(TabTarget),
    /// Enter one-handed resize mode
    EnableResizingMode,
    /// Show or hide the cursor bar
    ToggleCursorBar,
    /// Toggle caps lock
    ToggleCapsLockState,
    /// Show or hide the tab bar
    ToggleTabBar,
    /// Close the keyboard
    DismissKeyboard,
}

fn default_targets() -> Vec<String> {
    DEFAULT_SCAN_TARGETS.iter().map(|s| (*s).to_string()).collect()
}

impl Action {
    /// Text input action.
    pub fn input(text: impl Into<String>) -> Self {
        Self::Input(text.into())
    }

    /// Trailing-character substitution from `(from, to)` pairs.
    pub fn replace_last_characters<K, V>(table: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::ReplaceLastCharacters(
            table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Smart delete with explicit direction and targets.
    pub fn smart_delete<S: Into<String>>(
        direction: ScanDirection,
        targets: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::SmartDelete {
            direction,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Smart delete forward to the default punctuation set.
    #[must_use]
    pub fn smart_delete_default_targets() -> Self {
        Self::SmartDelete {
            direction: ScanDirection::default(),
            targets: default_targets(),
        }
    }

    /// Smart cursor move with explicit direction and targets.
    pub fn smart_move_cursor<S: Into<String>>(
        direction: ScanDirection,
        targets: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::SmartMoveCursor {
            direction,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Smart cursor move forward to the default punctuation set.
    #[must_use]
    pub fn smart_move_cursor_default() -> Self {
        Self::SmartMoveCursor {
            direction: ScanDirection::default(),
            targets: default_targets(),
        }
    }

    /// Switch to a built-in tab.
    #[must_use]
    pub const fn move_to_system_tab(tab: SystemTab) -> Self {
        Self::MoveTab(TabTarget::System(tab))
    }

    /// Switch to a custom tab by identifier.
    pub fn move_to_custom_tab(identifier: impl Into<String>) -> Self {
        Self::MoveTab(TabTarget::Custom(identifier.into()))
    }
}

/// Actions fired when a key is held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LongpressActions {
    /// Fired once when the long press is recognized
    pub start: Vec<Action>,
    /// Fired repeatedly while the key stays held
    pub repeat: Vec<Action>,
}

impl LongpressActions {
    /// The empty bundle, for keys without long-press behavior.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            start: Vec::new(),
            repeat: Vec::new(),
        }
    }

    /// Creates a bundle from both action lists.
    #[must_use]
    pub const fn new(start: Vec<Action>, repeat: Vec<Action>) -> Self {
        Self { start, repeat }
    }

    /// Returns true if neither list has any action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.repeat.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_equals_empty_bundle() {
        assert_eq!(LongpressActions::none(), LongpressActions::new(vec![], vec![]));
        assert_eq!(LongpressActions::none(), LongpressActions::default());
        assert!(LongpressActions::none().is_empty());
    }

    #[test]
    fn test_smart_delete_default_targets() {
        match Action::smart_delete_default_targets() {
            Action::SmartDelete { direction, targets } => {
                assert_eq!(direction, ScanDirection::Forward);
                assert_eq!(targets.len(), DEFAULT_SCAN_TARGETS.len());
                assert_eq!(targets.last().map(String::as_str), Some("\n"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_explicit_targets_are_not_substituted() {
        let action = Action::smart_delete(ScanDirection::Backward, Vec::<String>::new());
        assert_eq!(
            action,
            Action::SmartDelete {
                direction: ScanDirection::Backward,
                targets: vec![],
            }
        );
    }

    #[test]
    fn test_replace_table_builder() {
        let action = Action::replace_last_characters([("か", "が"), ("き", "ぎ")]);
        match action {
            Action::ReplaceLastCharacters(table) => {
                assert_eq!(table.get("か").map(String::as_str), Some("が"));
                assert_eq!(table.len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
