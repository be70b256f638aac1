//! Extension resolution from declared MIME types and magic numbers

use crate::common::fixtures;
use fb64::detection::{resolve_extension, DEFAULT_EXTENSION};

#[test]
fn test_declared_mime_wins() {
    assert_eq!(resolve_extension(Some("audio/wav"), None), "wav");
    assert_eq!(resolve_extension(Some("audio/x-wav"), None), "wav");
    assert_eq!(resolve_extension(Some("image/jpeg"), None), "jpg");
    assert_eq!(resolve_extension(Some("application/json"), None), "json");
    // MIME beats conflicting bytes
    assert_eq!(
        resolve_extension(Some("text/plain"), Some(fixtures::tiny_png().unwrap().as_slice())),
        "txt"
    );
}

#[test]
fn test_unknown_mime_uses_subtype() {
    assert_eq!(resolve_extension(Some("application/x-custom"), None), "x-custom");
}

#[test]
fn test_magic_numbers() {
    assert_eq!(resolve_extension(None, Some(&b"%PDF-1.4"[..])), "pdf");
    assert_eq!(resolve_extension(None, Some(fixtures::wav_header().as_slice())), "wav");
    assert_eq!(resolve_extension(None, Some(fixtures::mp3_with_id3().as_slice())), "mp3");
    assert_eq!(
        resolve_extension(None, Some(fixtures::tiny_gif().unwrap().as_slice())),
        "gif"
    );
}

#[test]
fn test_fallback_to_bin() {
    assert_eq!(resolve_extension(None, None), DEFAULT_EXTENSION);
    assert_eq!(resolve_extension(None, Some(&[0x00, 0x01, 0x02, 0x03][..])), "bin");
    // too short for the magic step
    assert_eq!(resolve_extension(None, Some(&[0x89, 0x50, 0x4E][..])), "bin");
}
