//! End-to-end tests for `custard validate` command.

use serde_json::json;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_valid_document() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_document_file(&test_document_basic());

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid document should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("test_custard"));
}

#[test]
fn test_validate_valid_document_json() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_document_file(&test_document_all_actions());

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], true);
    assert_eq!(result["identifier"], "all_actions");
    assert_eq!(result["display_name"], "All Actions");
    assert_eq!(result["key_count"], 3);
    assert!(result.get("error").is_none());
}

#[test]
fn test_validate_unsupported_version() {
    let config_dir = TempDir::new().unwrap();
    let mut value = custard::codec::to_value(&test_document_basic()).unwrap();
    value["metadata"]["custard_version"] = json!("2.0");
    let (path, _temp_dir) = create_temp_file("v2.json", value.to_string().as_bytes());

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["error"]["kind"], "unsupported_version");
    assert!(result["error"]["message"].as_str().unwrap().contains("2.0"));
}

#[test]
fn test_validate_reports_field_path() {
    let config_dir = TempDir::new().unwrap();
    let mut value = custard::codec::to_value(&test_document_basic()).unwrap();
    value["interface"]["keys"][1]["key"]["press_actions"][0]["type"] = json!("explode");
    let (path, _temp_dir) = create_temp_file("bad.json", value.to_string().as_bytes());

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Validation failed"));
    assert!(stdout.contains("unknown_action_type"));
    assert!(stdout.contains("interface.keys[1].key.press_actions[0].type"));
}

#[test]
fn test_validate_strict_rejects_duplicates() {
    let config_dir = TempDir::new().unwrap();
    let mut value = custard::codec::to_value(&test_document_basic()).unwrap();
    let records = value["interface"]["keys"].as_array_mut().unwrap();
    let copy = records[0].clone();
    records.push(copy);
    let (path, _temp_dir) = create_temp_file("dup.json", value.to_string().as_bytes());

    let lenient = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(lenient.status.code(), Some(0));

    let strict = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap(), "--strict", "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(strict.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&strict.stdout).unwrap();
    assert_eq!(result["error"]["kind"], "duplicate_specifier");
}

#[test]
fn test_validate_invalid_json() {
    let config_dir = TempDir::new().unwrap();
    let (path, _temp_dir) = create_temp_file("broken.json", b"{ not json");

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["error"]["kind"], "json");
}

#[test]
fn test_validate_missing_file() {
    let config_dir = TempDir::new().unwrap();

    let output = custard_command(config_dir.path())
        .args(["validate", "--file", "/nonexistent/document.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Missing file is an I/O error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"));
}
