//! Tests for config functionality.

use crate::config::{
    DeviceInfoConfig, default_orientation_argv, default_resolution_argv, default_uuid_argv,
};
use crate::template::ArgvTemplate;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = DeviceInfoConfig::default();

    assert_eq!(config.uuid.tokens()[0], "{ADB}");
    assert_eq!(config.uuid.tokens()[2], "{ADB_SERIAL}");
    assert_eq!(
        config.uuid.tokens().last().map(String::as_str),
        Some("settings get secure android_id")
    );
    assert!(config.orientation.tokens()[4].contains("SurfaceOrientation"));
    assert!(config.timeout_seconds.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_json_uses_defaults() {
    let config = DeviceInfoConfig::from_json("{}").unwrap();
    assert_eq!(config, DeviceInfoConfig::default());
}

#[test]
fn test_parse_partial_json() {
    let json = r#"{ "UUID": ["{ADB}", "-s", "{ADB_SERIAL}", "shell", "getprop ro.serialno"] }"#;
    let config = DeviceInfoConfig::from_json(json).unwrap();

    assert_eq!(config.uuid.tokens()[4], "getprop ro.serialno");
    assert_eq!(config.resolution, default_resolution_argv());
}

#[test]
fn test_parse_command_string_entry() {
    let json = r#"{ "Resolution": "{ADB} -s {ADB_SERIAL} shell 'wm size'" }"#;
    let config = DeviceInfoConfig::from_json(json).unwrap();

    assert_eq!(
        config.resolution,
        ArgvTemplate::new(["{ADB}", "-s", "{ADB_SERIAL}", "shell", "wm size"])
    );
}

#[test]
fn test_keys_are_case_sensitive() {
    let json = r#"{ "orientation": ["cat", "/tmp/rotation"] }"#;
    let config = DeviceInfoConfig::from_json(json).unwrap();
    assert_eq!(config.orientation, default_orientation_argv());
}

#[test]
fn test_both_spellings_in_one_document() {
    let json = r#"{
        "UUID": ["cat", "/tmp/id"],
        "uuid": ["cat", "/tmp/other"],
        "Orientation": "cat /tmp/rotation",
        "orientation": "cat /tmp/ignored"
    }"#;
    let config = DeviceInfoConfig::from_json(json).unwrap();
    assert_eq!(config.uuid, ArgvTemplate::new(["cat", "/tmp/id"]));
    assert_eq!(config.orientation, ArgvTemplate::new(["cat", "/tmp/rotation"]));

    let yaml = "UUID: cat /tmp/id\nuuid: cat /tmp/other\n";
    let config = DeviceInfoConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.uuid, ArgvTemplate::new(["cat", "/tmp/id"]));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{ "Screencap": ["adb", "exec-out", "screencap"], "timeout_seconds": 5 }"#;
    let config = DeviceInfoConfig::from_json(json).unwrap();
    assert_eq!(config.uuid, default_uuid_argv());
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn test_empty_command_is_rejected() {
    let err = DeviceInfoConfig::from_json(r#"{ "UUID": [] }"#).unwrap_err();
    assert!(err.to_string().contains("UUID command is empty"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = DeviceInfoConfig::from_json(r#"{ "timeout_seconds": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_invalid_json_is_config_error() {
    let err = DeviceInfoConfig::from_json("{ not json").unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::CONFIG_ERROR);
}

#[test]
fn test_wrong_entry_type_is_rejected() {
    assert!(DeviceInfoConfig::from_json(r#"{ "UUID": 42 }"#).is_err());
}

#[test]
fn test_parse_yaml() {
    let yaml = r#"
Orientation:
  - "{ADB}"
  - "-s"
  - "{ADB_SERIAL}"
  - shell
  - "dumpsys input | grep -m 1 -o -E 'SurfaceOrientation: [0-9]'"
timeout_seconds: 10
"#;
    let config = DeviceInfoConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.orientation.tokens().len(), 5);
    assert_eq!(config.timeout_seconds, Some(10));
}

#[test]
fn test_empty_yaml_uses_defaults() {
    assert_eq!(
        DeviceInfoConfig::from_yaml("").unwrap(),
        DeviceInfoConfig::default()
    );
}

#[test]
fn test_load_picks_format_by_extension() {
    let temp_dir = TempDir::new().unwrap();

    let json_path = temp_dir.path().join("device.json");
    std::fs::write(&json_path, r#"{ "UUID": "cat /etc/machine-id" }"#).unwrap();
    let config = DeviceInfoConfig::load(&json_path).unwrap();
    assert_eq!(config.uuid, ArgvTemplate::new(["cat", "/etc/machine-id"]));

    let yaml_path = temp_dir.path().join("device.yml");
    std::fs::write(&yaml_path, "UUID: cat /etc/hostname\n").unwrap();
    let config = DeviceInfoConfig::load(&yaml_path).unwrap();
    assert_eq!(config.uuid, ArgvTemplate::new(["cat", "/etc/hostname"]));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = DeviceInfoConfig::load(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_json_round_trip_keeps_keys() {
    let json = DeviceInfoConfig::default().to_json().unwrap();
    assert!(json.contains("\"UUID\""));
    assert!(json.contains("\"Resolution\""));
    assert!(!json.contains("timeout_seconds"));
    assert_eq!(
        DeviceInfoConfig::from_json(&json).unwrap(),
        DeviceInfoConfig::default()
    );
}
