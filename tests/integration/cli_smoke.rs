//! CLI Smoke Test
//!
//! Drives the library entry points behind `encode`, `decode`, `inspect` and
//! `recent` in sequence against one scratch configuration, so the commands
//! share a recent-files database the way separate CLI invocations would.

use crate::common::{data_url, fixtures, test_config};
use fb64::cli::commands::inspect::InspectReport;
use fb64::cli::input::open_recent_files;
use fb64::decoder::ContentDecoder;
use fb64::processor::FileConverter;
use fb64::types::{ContentKind, FileCategory};
use tempfile::TempDir;

#[tokio::test]
async fn test_encode_decode_recent_share_history() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let source = temp_dir.path().join("notes.txt");
    std::fs::write(&source, "hello fb64").unwrap();

    // encode
    let encoded = {
        let store = open_recent_files(&config, false).unwrap();
        let mut converter = FileConverter::new(&config, store);
        converter.encode_file(&source, |_| {}).await.unwrap()
    };
    assert_eq!(encoded, "aGVsbG8gZmI2NA==");

    // inspect
    let report = InspectReport::from_input(&ContentDecoder::default(), &encoded, 4, 200)
        .unwrap()
        .unwrap();
    assert_eq!(report.kind, Some(ContentKind::Text));
    assert_eq!(report.header_hex, "68656c6c");
    assert_eq!(report.preview.as_deref(), Some("hello fb64"));

    // decode
    let png = fixtures::tiny_png().unwrap();
    let exported = {
        let store = open_recent_files(&config, false).unwrap();
        let mut converter = FileConverter::new(&config, store);
        converter
            .export_decoded(&data_url("image/png", &png), Some("pixel"))
            .unwrap()
    };
    assert_eq!(exported.path, config.export.output_dir.join("pixel.png"));
    assert_eq!(std::fs::read(&exported.path).unwrap(), png);

    // recent
    let store = open_recent_files(&config, false).unwrap();
    let names: Vec<&str> = store.list().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["pixel.png", "notes.txt"]);
    assert_eq!(store.list()[0].category, FileCategory::Image);
    assert_eq!(store.list()[1].size_bytes, 10);
    assert!(serde_json::to_string_pretty(store.list()).is_ok());
}

#[tokio::test]
async fn test_no_history_leaves_recent_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let source = temp_dir.path().join("clip.bin");
    std::fs::write(&source, fixtures::sample_bytes(64)).unwrap();

    let store = open_recent_files(&config, true).unwrap();
    let mut converter = FileConverter::new(&config, store);
    converter.encode_file(&source, |_| {}).await.unwrap();
    converter
        .export_decoded(&data_url("text/plain", b"scratch"), Some("scratch"))
        .unwrap();

    assert!(!config.storage.recent_files_db.exists());
    let store = open_recent_files(&config, false).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn test_inspect_empty_input_reports_nothing() {
    let report = InspectReport::from_input(&ContentDecoder::default(), "", 32, 200).unwrap();
    assert!(report.is_none());
}
