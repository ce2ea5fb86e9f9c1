//! Shared test fixtures for codec and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use custard::models::presets::{delete_key, flick_key, sample_custard};
use custard::models::{
    Action, Custard, CustomKey, FlickDirection, InputStyle, Interface, KeyColor, KeyDesign,
    KeyLayout, KeyStyle, Language, LongpressActions, Metadata, ScanDirection, ScrollDirection,
    Specifier, SystemKey, SystemTab, Variation, VariationKey,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The ready-made 2×2 document with fixed identifiers.
pub fn test_document_basic() -> Custard {
    sample_custard(
        "test_custard",
        "Test Custard",
        Language::JaJp,
        InputStyle::Direct,
    )
}

/// One instance of every action variant, in declaration order.
pub fn all_actions() -> Vec<Action> {
    vec![
        Action::input("あ"),
        Action::ReplaceDefault,
        Action::replace_last_characters([("か", "が"), ("は", "ば")]),
        Action::Delete(3),
        Action::smart_delete(ScanDirection::Backward, ["。", "、"]),
        Action::SmartDeleteDefault,
        Action::Complete,
        Action::MoveCursor(-2),
        Action::smart_move_cursor(ScanDirection::Forward, ["\n"]),
        Action::move_to_system_tab(SystemTab::FlickNumberSymbols),
        Action::move_to_custom_tab("my_tab"),
        Action::EnableResizingMode,
        Action::ToggleCursorBar,
        Action::ToggleCapsLockState,
        Action::ToggleTabBar,
        Action::DismissKeyboard,
    ]
}

/// A fixed-grid document whose single custom key carries every action
/// variant, both variation kinds and a system-image label.
pub fn test_document_all_actions() -> Custard {
    let key = CustomKey::new(KeyDesign::system_image("gear").with_color(KeyColor::Selected))
        .with_press_actions(all_actions())
        .with_longpress_actions(LongpressActions::new(
            vec![Action::ToggleCursorBar],
            vec![Action::Delete(1)],
        ))
        .with_variation(Variation::flick(
            FlickDirection::Bottom,
            VariationKey::input("ゃ"),
        ))
        .with_variation(Variation::longpress(VariationKey::input("ゅ")));

    let interface = Interface::new(
        KeyStyle::PcStyle,
        KeyLayout::GridFit {
            row_count: 1,
            column_count: 3,
        },
    )
    .with_key(Specifier::grid_fit(0, 0), key)
    .with_key(Specifier::grid_fit(1, 0), SystemKey::Enter)
    .with_key(Specifier::grid_fit(2, 0), delete_key());

    Custard::new(
        "all_actions",
        Language::EnUs,
        InputStyle::Roman2Kana,
        Metadata::new("All Actions"),
        interface,
    )
}

/// A horizontally scrolling document with `count` input keys.
pub fn test_document_scroll(count: i64) -> Custard {
    let mut interface = Interface::new(
        KeyStyle::PcStyle,
        KeyLayout::GridScroll {
            direction: ScrollDirection::Horizontal,
            row_count: 2.0,
            column_count: 4.5,
        },
    );
    for index in 0..count {
        interface = interface.with_key(
            Specifier::grid_scroll(index),
            flick_key(index.to_string(), Vec::<(FlickDirection, String)>::new()),
        );
    }

    Custard::new(
        "scroll",
        Language::None,
        InputStyle::Direct,
        Metadata::new("Scroll"),
        interface,
    )
}

/// Writes `contents` to `<temp>/<name>` and returns the path with its guard.
pub fn create_temp_file(name: &str, contents: &[u8]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Writes `document` as pretty JSON to a temp file.
pub fn create_temp_document_file(document: &Custard) -> (PathBuf, TempDir) {
    let bytes = custard::encode_pretty(document).expect("Failed to encode document");
    create_temp_file("document.json", &bytes)
}

/// Writes `document` as compact JSON to a temp file.
pub fn create_temp_compact_document_file(document: &Custard) -> (PathBuf, TempDir) {
    let bytes = custard::encode(document).expect("Failed to encode document");
    create_temp_file("document.json", &bytes)
}

/// Reads a file into a string.
pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

/// Path to the custard binary
pub fn custard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_custard")
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to every command of a test that shares config.
pub fn custard_command(config_dir: &Path) -> Command {
    let mut cmd = Command::new(custard_bin());
    cmd.env("CUSTARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}
