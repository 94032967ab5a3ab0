//! Integration tests: the engine writes verdicts through the file store and a
//! later run picks them up instead of asking the oracle again.

use camino::Utf8PathBuf;
use customs_domain::ClassificationEngine;
use customs_store::open_store;
use customs_types::{StorageProvider, Verdict};
use std::cell::Cell;
use tempfile::TempDir;

fn provisioned_dir(tmp: &TempDir) -> Utf8PathBuf {
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
    std::fs::write(root.join("safe.txt"), "Candy\nTowel\nany type of Glasses\n").expect("safe");
    std::fs::write(root.join("dangerous.txt"), "Smokes\nany type of Cowboy Hat\n")
        .expect("dangerous");
    root
}

#[test]
fn verdicts_survive_a_restart() {
    let tmp = TempDir::new().expect("temp dir");
    let root = provisioned_dir(&tmp);

    // First run: the oracle says no to everything.
    let store = open_store(StorageProvider::FileItem, &root).expect("open");
    let mut engine = ClassificationEngine::new(store, |_: &str| false);
    assert_eq!(engine.classify_item("Camera"), Verdict::Reject);
    assert_eq!(engine.classify_item("Towel"), Verdict::Accept);
    drop(engine);

    // Second run: a different oracle, but the remembered verdict wins.
    let asked = Cell::new(0);
    let store = open_store(StorageProvider::FileItem, &root).expect("open");
    let mut engine = ClassificationEngine::new(store, |_: &str| {
        asked.set(asked.get() + 1);
        true
    });
    assert_eq!(engine.classify_item("Camera"), Verdict::Reject);
    assert_eq!(asked.get(), 0);

    // Only oracle verdicts are remembered, never list hits.
    let text = std::fs::read_to_string(root.join("universe.json")).expect("memory file");
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(json, serde_json::json!({ "Camera": "REJECT" }));
}

#[test]
fn unreadable_storage_still_classifies() {
    let tmp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().join("missing")).expect("utf8 path");

    let store = open_store(StorageProvider::FileItem, &root).expect("open");
    let mut engine = ClassificationEngine::new(store, customs_domain::evaluate_unknown_item);

    assert!(engine.safe_rules().is_empty());
    assert_eq!(engine.classify_item("Camera"), Verdict::Accept);
    // The write-through created the directory and the memory file.
    assert!(root.join("universe.json").exists());
}
