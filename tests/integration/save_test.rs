use consolekit::SaveFile;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Player {
    name: String,
    score: u32,
}

#[test]
fn test_save_writes_pretty_json_with_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let mut save = SaveFile::create_in(dir.path(), "progress").unwrap();
    save.set("level", 2).unwrap();
    save.save().unwrap();

    let written = fs::read_to_string(dir.path().join("progress.json")).unwrap();
    assert_eq!(written, "{\n    \"level\": 2\n}");
}

#[test]
fn test_structured_values_roundtrip_through_file() {
    let dir = TempDir::new().unwrap();
    let mut save = SaveFile::create_in(dir.path(), "players").unwrap();
    let player = Player {
        name: "ada".to_string(),
        score: 1200,
    };

    save.set("best", &player).unwrap();
    save.save().unwrap();

    let written = fs::read_to_string(dir.path().join("players.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["best"]["score"], 1200);
    assert_eq!(save.get::<Player>("best").unwrap(), player);
}

#[test]
fn test_reset_clears_data_and_file() {
    let dir = TempDir::new().unwrap();
    let mut save = SaveFile::create_in(dir.path(), "game").unwrap();
    save.set("a", 1).unwrap();
    save.set("b", 2).unwrap();
    save.save().unwrap();

    save.reset().unwrap();

    assert!(save.is_empty());
    assert!(!save.has_unsaved_changes());
    assert_eq!(fs::read_to_string(dir.path().join("game.json")).unwrap(), "{}");
}

#[test]
fn test_remove_marks_unsaved() {
    let dir = TempDir::new().unwrap();
    let mut save = SaveFile::create_in(dir.path(), "game").unwrap();
    save.set("a", 1).unwrap();
    save.save().unwrap();

    let old = save.remove("a").unwrap();
    assert_eq!(old, serde_json::json!(1));
    assert!(save.has_unsaved_changes());
    assert!(!save.contains("a"));
}

#[test]
fn test_create_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.json");
    fs::write(&path, "{\"stale\": true}").unwrap();

    let mut save = SaveFile::create_in(dir.path(), "old").unwrap();
    save.keep();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert_eq!(save.path().unwrap(), path.canonicalize().unwrap());
}
