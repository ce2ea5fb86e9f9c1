//! Action encoding.
//!
//! Each action is an object with a `type` discriminant plus the fields its
//! variant needs. Payload-free variants carry only the discriminant.

use crate::codec::reader::{index, join, Record};
use crate::error::{CustardError, Result};
use crate::models::{Action, LongpressActions, SystemTab, TabTarget, WireEnum};
use serde_json::{json, Map, Value};

const TAB_SYSTEM: &str = "system";
const TAB_CUSTOM: &str = "custom";

/// Wire discriminant of an action.
pub const fn discriminant(action: &Action) -> &'static str {
    match action {
        Action::Input(_) => "input",
        Action::ReplaceDefault => "replace_default",
        Action::ReplaceLastCharacters(_) => "replace_last_characters",
        Action::Delete(_) => "delete",
        Action::SmartDelete { .. } => "smart_delete",
        Action::SmartDeleteDefault => "smart_delete_default",
        Action::Complete => "complete",
        Action::MoveCursor(_) => "move_cursor",
        Action::SmartMoveCursor { .. } => "smart_move_cursor",
        Action::MoveTab(_) => "move_tab",
        Action::EnableResizingMode => "enable_resizing_mode",
        Action::ToggleCursorBar => "toggle_cursor_bar",
        Action::ToggleCapsLockState => "toggle_caps_lock_state",
        Action::ToggleTabBar => "toggle_tab_bar",
        Action::DismissKeyboard => "dismiss_keyboard",
    }
}

/// Encodes one action.
pub fn encode(action: &Action) -> Value {
    let mut record = Map::new();
    record.insert("type".to_string(), Value::from(discriminant(action)));

    match action {
        Action::Input(text) => {
            record.insert("text".to_string(), Value::from(text.as_str()));
        }
        Action::ReplaceLastCharacters(table) => {
            record.insert("table".to_string(), json!(table));
        }
        Action::Delete(count) | Action::MoveCursor(count) => {
            record.insert("count".to_string(), Value::from(*count));
        }
        Action::SmartDelete { direction, targets }
        | Action::SmartMoveCursor { direction, targets } => {
            record.insert("direction".to_string(), Value::from(direction.as_wire()));
            record.insert("targets".to_string(), json!(targets));
        }
        Action::MoveTab(target) => {
            let (tab_type, identifier) = match target {
                TabTarget::System(tab) => (TAB_SYSTEM, tab.as_wire()),
                TabTarget::Custom(identifier) => (TAB_CUSTOM, identifier.as_str()),
            };
            record.insert("tab_type".to_string(), Value::from(tab_type));
            record.insert("identifier".to_string(), Value::from(identifier));
        }
        Action::ReplaceDefault
        | Action::SmartDeleteDefault
        | Action::Complete
        | Action::EnableResizingMode
        | Action::ToggleCursorBar
        | Action::ToggleCapsLockState
        | Action::ToggleTabBar
        | Action::DismissKeyboard => {}
    }

    Value::Object(record)
}

/// Decodes one action.
pub fn decode(value: &Value, path: &str) -> Result<Action> {
    let record = Record::new(value, path)?;
    let tag = record.str("type")?;

    let action = match tag {
        "input" => Action::Input(record.str("text")?.to_string()),
        "replace_default" => Action::ReplaceDefault,
        "replace_last_characters" => Action::ReplaceLastCharacters(record.string_table("table")?),
        "delete" => Action::Delete(record.i64("count")?),
        "smart_delete" => Action::SmartDelete {
            direction: record.wire_enum("direction")?,
            targets: record.strings("targets")?,
        },
        "smart_delete_default" => Action::SmartDeleteDefault,
        "complete" => Action::Complete,
        "move_cursor" => Action::MoveCursor(record.i64("count")?),
        "smart_move_cursor" => Action::SmartMoveCursor {
            direction: record.wire_enum("direction")?,
            targets: record.strings("targets")?,
        },
        "move_tab" => Action::MoveTab(decode_tab_target(&record)?),
        "enable_resizing_mode" => Action::EnableResizingMode,
        "toggle_cursor_bar" => Action::ToggleCursorBar,
        "toggle_caps_lock_state" => Action::ToggleCapsLockState,
        "toggle_tab_bar" => Action::ToggleTabBar,
        "dismiss_keyboard" => Action::DismissKeyboard,
        other => {
            return Err(CustardError::UnknownActionType {
                path: record.field_path("type"),
                value: other.to_string(),
            })
        }
    };
    Ok(action)
}

/// Reads `tab_type` first, then interprets `identifier` accordingly.
fn decode_tab_target(record: &Record<'_>) -> Result<TabTarget> {
    match record.str("tab_type")? {
        TAB_SYSTEM => Ok(TabTarget::System(record.wire_enum::<SystemTab>("identifier")?)),
        TAB_CUSTOM => Ok(TabTarget::Custom(record.str("identifier")?.to_string())),
        other => Err(CustardError::UnknownVariant {
            field: record.field_path("tab_type"),
            value: other.to_string(),
        }),
    }
}

/// Encodes an ordered action list.
pub fn encode_list(actions: &[Action]) -> Value {
    Value::Array(actions.iter().map(encode).collect())
}

/// Decodes the ordered action list stored under `name`.
pub(crate) fn decode_list(record: &Record<'_>, name: &str) -> Result<Vec<Action>> {
    let path = record.field_path(name);
    record
        .array(name)?
        .iter()
        .enumerate()
        .map(|(idx, item)| decode(item, &index(&path, idx)))
        .collect()
}

/// Encodes a long-press bundle.
pub fn encode_longpress(actions: &LongpressActions) -> Value {
    json!({
        "start": encode_list(&actions.start),
        "repeat": encode_list(&actions.repeat),
    })
}

/// Decodes the long-press bundle stored under `name`.
pub(crate) fn decode_longpress(record: &Record<'_>, name: &str) -> Result<LongpressActions> {
    let path = join(record.path(), name);
    let bundle = Record::new(record.value(name)?, &path)?;
    Ok(LongpressActions {
        start: decode_list(&bundle, "start")?,
        repeat: decode_list(&bundle, "repeat")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanDirection;

    fn roundtrip(action: &Action) -> Action {
        decode(&encode(action), "action").unwrap()
    }

    #[test]
    fn test_every_variant_roundtrips() {
        let actions = vec![
            Action::input("あ"),
            Action::ReplaceDefault,
            Action::replace_last_characters([("は", "ば"), ("ば", "ぱ")]),
            Action::Delete(-3),
            Action::smart_delete(ScanDirection::Backward, ["。"]),
            Action::SmartDeleteDefault,
            Action::Complete,
            Action::MoveCursor(2),
            Action::smart_move_cursor_default(),
            Action::move_to_system_tab(SystemTab::FlickNumberSymbols),
            Action::move_to_custom_tab("symbols"),
            Action::EnableResizingMode,
            Action::ToggleCursorBar,
            Action::ToggleCapsLockState,
            Action::ToggleTabBar,
            Action::DismissKeyboard,
        ];
        for action in &actions {
            assert_eq!(&roundtrip(action), action);
        }
    }

    #[test]
    fn test_payload_free_variants_encode_only_type() {
        assert_eq!(encode(&Action::Complete), json!({"type": "complete"}));
        assert_eq!(
            encode(&Action::SmartDeleteDefault),
            json!({"type": "smart_delete_default"})
        );
    }

    #[test]
    fn test_input_wire_shape() {
        assert_eq!(
            encode(&Action::input("x")),
            json!({"type": "input", "text": "x"})
        );
    }

    #[test]
    fn test_system_tab_wire_shape() {
        assert_eq!(
            encode(&Action::move_to_system_tab(SystemTab::LastTab)),
            json!({"type": "move_tab", "tab_type": "system", "identifier": "last_tab"})
        );
    }

    #[test]
    fn test_smart_delete_requires_targets_on_decode() {
        let value = json!({"type": "smart_delete", "direction": "forward"});
        match decode(&value, "a") {
            Err(CustardError::MissingField { path }) => assert_eq!(path, "a.targets"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_action_type() {
        let value = json!({"type": "launch_rocket"});
        match decode(&value, "press_actions[0]") {
            Err(CustardError::UnknownActionType { path, value }) => {
                assert_eq!(path, "press_actions[0].type");
                assert_eq!(value, "launch_rocket");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_system_tab() {
        let value = json!({"type": "move_tab", "tab_type": "system", "identifier": "my_tab"});
        assert_eq!(decode(&value, "a").unwrap_err().kind(), "unknown_variant");
    }

    #[test]
    fn test_unknown_tab_type() {
        let value = json!({"type": "move_tab", "tab_type": "remote", "identifier": "x"});
        let err = decode(&value, "a").unwrap_err();
        assert!(err.to_string().contains("a.tab_type"));
    }

    #[test]
    fn test_longpress_roundtrip() {
        let bundle = LongpressActions::new(vec![Action::Delete(1)], vec![Action::MoveCursor(-1)]);
        let wrapper = json!({"longpress_actions": encode_longpress(&bundle)});
        let record = Record::new(&wrapper, "key").unwrap();
        assert_eq!(decode_longpress(&record, "longpress_actions").unwrap(), bundle);
    }

    #[test]
    fn test_empty_longpress_wire_shape() {
        assert_eq!(
            encode_longpress(&LongpressActions::none()),
            json!({"start": [], "repeat": []})
        );
    }

    #[test]
    fn test_list_error_path_includes_index() {
        let wrapper = json!({"press_actions": [{"type": "input", "text": "a"}, {"type": "delete"}]});
        let record = Record::new(&wrapper, "key").unwrap();
        let err = decode_list(&record, "press_actions").unwrap_err();
        assert_eq!(err.to_string(), "key.press_actions[1].count: missing required field");
    }
}
