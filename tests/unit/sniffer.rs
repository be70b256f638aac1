//! Content sniffer precedence

use crate::common::fixtures;
use fb64::types::{ContentKind, ContentSniffer};

#[test]
fn test_real_images_detected() {
    let sniffer = ContentSniffer::new();
    assert_eq!(
        sniffer.detect(&fixtures::tiny_png().unwrap()),
        Some(ContentKind::Image)
    );
    assert_eq!(
        sniffer.detect(&fixtures::tiny_gif().unwrap()),
        Some(ContentKind::Image)
    );
}

#[test]
fn test_magic_alone_is_not_an_image() {
    assert_eq!(ContentSniffer::new().detect(&fixtures::corrupt_png()), None);
}

#[test]
fn test_json_before_text() {
    let sniffer = ContentSniffer::new();
    assert_eq!(sniffer.detect(b"[1, 2, 3]"), Some(ContentKind::Json));
    assert_eq!(sniffer.detect(b"[1, 2,"), Some(ContentKind::Text));
}

#[test]
fn test_audio_signatures() {
    let sniffer = ContentSniffer::new();
    assert_eq!(sniffer.detect(&fixtures::wav_header()), Some(ContentKind::Audio));
    assert_eq!(sniffer.detect(&fixtures::mp3_with_id3()), Some(ContentKind::Audio));
}

#[test]
fn test_pdf_only_with_detection_enabled() {
    let mut pdf = b"%PDF-1.7\n".to_vec();
    pdf.extend_from_slice(&[0xE2, 0xE3, 0xCF, 0xD3]);

    assert_eq!(ContentSniffer::new().detect(&pdf), None);
    assert_eq!(
        ContentSniffer::with_pdf_detection(true).detect(&pdf),
        Some(ContentKind::Pdf)
    );
}

#[test]
fn test_precedence_order() {
    assert_eq!(
        ContentSniffer::new().precedence(),
        vec![
            ContentKind::Image,
            ContentKind::Json,
            ContentKind::Text,
            ContentKind::Audio
        ]
    );
}
