use consolekit::core::progress::ProgressOptions;
use consolekit::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.progress.is_empty());
    assert_eq!(config.progress_options().unwrap(), ProgressOptions::default());
}

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_progress_options(&ProgressOptions::new().width(30).filled_char("#"));
    config.scroll_pause_ms = Some(400);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    let options = loaded.progress_options().unwrap();
    assert_eq!(options.width, Some(30));
    assert_eq!(options.validate().unwrap().filled_char, '#');
}

#[test]
fn test_empty_config_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_hand_edited_progress_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "progress": { "width": 8, "step": 2.0 } }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    let options = config.progress_options().unwrap();
    // kinds are right, so reading succeeds; the range check happens on validate
    assert!(options.validate().is_err());
}
