//! On-disk round trips for [`FileHistoryStore`].

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use krishi_history::{DetectionRecord, FileHistoryStore, HistoryError, HistoryLog};
use krishi_types::{DiseaseDiagnosis, Severity};

fn detection(crop: &str, disease: &str) -> DetectionRecord {
    DetectionRecord {
        crop: crop.to_owned(),
        image: format!("{crop}-leaf.jpg"),
        diagnosis: DiseaseDiagnosis {
            disease: disease.to_owned(),
            confidence: 88.4,
            solution: "Remove affected leaves".to_owned(),
            prevention: "Rotate crops".to_owned(),
            severity: Severity::Medium,
            symptoms: vec!["Brown spots".to_owned()],
        },
    }
}

// =============================================================================
// Load
// =============================================================================

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("history.json"), 50).unwrap();
    let log: HistoryLog<DetectionRecord> = store.load().unwrap();
    assert!(log.is_empty());
    assert_eq!(log.capacity(), 50);
}

#[test]
fn malformed_file_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = FileHistoryStore::new(&path, 5).unwrap();
    let result = store.load::<DetectionRecord>();
    assert!(matches!(result, Err(HistoryError::Json { .. })));
}

#[test]
fn zero_capacity_store_is_rejected() {
    let result = FileHistoryStore::new("history.json", 0);
    assert!(matches!(result, Err(HistoryError::ZeroCapacity)));
}

// =============================================================================
// Append and save
// =============================================================================

#[test]
fn append_persists_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("nested/history.json"), 50).unwrap();

    store.append(detection("Tomato", "Early Blight")).unwrap();
    let latest = store.append(detection("Potato", "Late Blight")).unwrap();

    let log: HistoryLog<DetectionRecord> = store.load().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log.latest().unwrap().id, latest);
    assert_eq!(log.entries()[0].record.crop, "Potato");
    assert_eq!(log.entries()[1].record.diagnosis.disease, "Early Blight");
}

#[test]
fn append_evicts_beyond_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("history.json"), 3).unwrap();
    for crop in ["Rice", "Wheat", "Corn", "Tomato", "Potato"] {
        store.append(detection(crop, "Healthy")).unwrap();
    }
    let log: HistoryLog<DetectionRecord> = store.load().unwrap();
    let crops: Vec<&str> = log.entries().iter().map(|e| e.record.crop.as_str()).collect();
    assert_eq!(crops, ["Potato", "Tomato", "Corn"]);
}

#[test]
fn file_is_pretty_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileHistoryStore::new(&path, 10).unwrap();
    store.append(detection("Rice", "Blast")).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &json[0];
    assert!(first.get("recordedAt").is_some());
    assert_eq!(first["record"]["diagnosis"]["disease"], "Blast");
    assert_eq!(first["record"]["diagnosis"]["severity"], "medium");
}

#[test]
fn smaller_capacity_truncates_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let wide = FileHistoryStore::new(&path, 10).unwrap();
    for n in 0..6 {
        wide.append(n).unwrap();
    }
    let narrow = FileHistoryStore::new(&path, 2).unwrap();
    let log: HistoryLog<u32> = narrow.load().unwrap();
    let values: Vec<u32> = log.entries().iter().map(|e| e.record).collect();
    assert_eq!(values, [5, 4]);
}

#[test]
fn clear_leaves_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileHistoryStore::new(&path, 10).unwrap();
    store.append(detection("Wheat", "Rust")).unwrap();
    store.clear().unwrap();

    let log: HistoryLog<DetectionRecord> = store.load().unwrap();
    assert!(log.is_empty());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!([]));
}
