//! Chunked file encoding through the converter

use crate::common::{fixtures, test_config};
use fb64::database::InMemoryRecentFiles;
use fb64::processor::{ChunkedEncoder, EncoderError, EncodingProgress, FileConverter};
use fb64::shared::base64_helpers;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_large_file_matches_single_pass_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blob.bin");
    let data = fixtures::sample_bytes(10_000);
    std::fs::write(&path, &data).unwrap();

    let encoder = ChunkedEncoder::new(1_000, Duration::ZERO);
    let mut updates: Vec<EncodingProgress> = Vec::new();
    let encoded = encoder
        .encode_file(&path, |p| updates.push(p))
        .await
        .unwrap();

    assert_eq!(encoded, base64_helpers::encode(&data));
    assert_eq!(base64_helpers::decode(&encoded).unwrap(), data);

    // 999-byte chunks
    assert_eq!(updates.len(), 11);
    assert!(updates
        .windows(2)
        .all(|w| w[0].bytes_processed < w[1].bytes_processed));
    let last = updates.last().unwrap();
    assert_eq!(last.bytes_processed, 10_000);
    assert_eq!(last.total_bytes, 10_000);
    assert!(last.is_complete());
}

#[tokio::test]
async fn test_converter_records_encoded_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let path = temp_dir.path().join("cover.png");
    let png = fixtures::tiny_png().unwrap();
    std::fs::write(&path, &png).unwrap();

    let mut converter = FileConverter::new(&config, InMemoryRecentFiles::new(10));
    let encoded = converter.encode_file(&path, |_| {}).await.unwrap();

    assert_eq!(base64_helpers::decode(&encoded).unwrap(), png);
    let recent = converter.recent_files();
    assert_eq!(recent[0].name, "cover.png");
    assert_eq!(recent[0].size_bytes, png.len() as i64);
}

#[tokio::test]
async fn test_unreadable_source() {
    let temp_dir = TempDir::new().unwrap();
    let err = ChunkedEncoder::default()
        .encode_file(temp_dir.path().join("nope.mp3"), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, EncoderError::SourceUnreadable { .. }));
}

#[tokio::test]
async fn test_encode_is_cancellable_by_timeout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("slow.bin");
    std::fs::write(&path, fixtures::sample_bytes(3_000)).unwrap();

    let slow = ChunkedEncoder::new(300, Duration::from_millis(100));
    let result =
        tokio::time::timeout(Duration::from_millis(50), slow.encode_file(&path, |_| {})).await;
    assert!(result.is_err());

    // nothing is left behind; a fresh run starts over
    let encoded = ChunkedEncoder::new(300, Duration::ZERO)
        .encode_file(&path, |_| {})
        .await
        .unwrap();
    assert_eq!(encoded.len(), base64_helpers::encoded_len(3_000));
}
