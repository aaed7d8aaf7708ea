//! Unit tests for settings loading and validation.

use fruitpicker::engine::EngineOptions;
use fruitpicker::error::SettingsError;
use fruitpicker::settings::Settings;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_load_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.layout.columns = 7;
    settings.click_tolerance = 3.0;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(EngineOptions::from(&loaded).click_tolerance, 3.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Settings::load_from(&path) {
        Err(SettingsError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_out_of_range_value_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "layout": { "item_height": 0 } }"#).unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { field: "layout.item_height", .. }));
    assert_eq!(err.to_string(), "Invalid setting `layout.item_height`: must be positive");
}

#[test]
fn test_defaults_serialize_every_field() {
    let value = serde_json::to_value(Settings::default()).unwrap();
    assert_eq!(value["layout"]["columns"], 5);
    assert_eq!(value["spatial_index_threshold"], 2000);
    assert_eq!(value["log_filter"], "fruitpicker=info");
    assert_eq!(value["click_tolerance"].as_f64(), Some(0.0));
    assert_eq!(value["layout"]["item_width"].as_f64(), Some(160.0));
}
