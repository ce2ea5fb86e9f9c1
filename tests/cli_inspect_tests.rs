//! End-to-end tests for `custard inspect` command.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_inspect_human_readable() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_document_file(&test_document_basic());

    let output = custard_command(config_dir.path())
        .args(["inspect", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("test_custard (Test Custard)"));
    assert!(stdout.contains("Keys (4):"));
    assert!(stdout.contains("change_keyboard"));
    assert!(stdout.contains("grid_fit (0,1) 1×1"));
}

#[test]
fn test_inspect_json() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_document_file(&test_document_scroll(3));

    let output = custard_command(config_dir.path())
        .args(["inspect", "--file", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["identifier"], "scroll");
    assert_eq!(result["language"], "none");
    assert_eq!(result["key_style"], "pc_style");

    let keys = result["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 3);
    for (idx, key) in keys.iter().enumerate() {
        assert_eq!(key["specifier_type"], "grid_scroll");
        assert_eq!(key["specifier"]["index"], idx);
        assert_eq!(key["key_type"], "custom");
    }
}

#[test]
fn test_inspect_invalid_document() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_file("bad.json", b"[]");

    let output = custard_command(config_dir.path())
        .args(["inspect", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}
