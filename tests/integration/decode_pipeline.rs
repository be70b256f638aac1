//! Paste-to-preview pipeline: normalise, decode, classify, resolve extension

use crate::common::{data_url, fixtures, to_base64};
use fb64::decoder::{decode_content, ContentDecoder, DecoderError};
use fb64::types::{ContentKind, ContentSniffer};

#[test]
fn test_png_data_url() {
    let png = fixtures::tiny_png().unwrap();
    let decoded = ContentDecoder::default()
        .decode(&data_url("image/png", &png))
        .unwrap()
        .unwrap();

    assert_eq!(decoded.content.kind(), ContentKind::Image);
    assert_eq!(decoded.content.bytes().as_slice(), png.as_slice());
    assert_eq!(decoded.declared_mime.as_deref(), Some("image/png"));
    assert_eq!(decoded.extension(), "png");
}

#[test]
fn test_plain_base64_json() {
    let content = decode_content(&to_base64(br#"{"name":"fb64","ok":true}"#))
        .unwrap()
        .unwrap();
    assert_eq!(content.kind(), ContentKind::Json);
    assert_eq!(content.kind().title(), "JSON");
}

#[test]
fn test_undeclared_wav_resolves_from_bytes() {
    let decoded = ContentDecoder::default()
        .decode(&to_base64(&fixtures::wav_header()))
        .unwrap()
        .unwrap();
    assert_eq!(decoded.content.kind(), ContentKind::Audio);
    assert_eq!(decoded.declared_mime, None);
    assert_eq!(decoded.extension(), "wav");
}

#[test]
fn test_corrupt_png_is_unsupported() {
    let err = decode_content(&data_url("image/png", &fixtures::corrupt_png())).unwrap_err();
    assert!(matches!(err, DecoderError::UnsupportedContent));
    assert_eq!(
        err.user_message(),
        "Unable to decode content. Unsupported format."
    );
}

#[test]
fn test_invalid_and_empty_inputs() {
    assert!(decode_content("").unwrap().is_none());
    assert!(decode_content("data:text/plain;base64,").unwrap().is_none());
    assert!(matches!(
        decode_content("data:text/plain;base64,@@@@"),
        Err(DecoderError::InvalidBase64(_))
    ));
}

#[test]
fn test_each_input_classified_independently() {
    let decoder = ContentDecoder::new(ContentSniffer::new());
    let first = decoder.decode(&to_base64(b"plain words")).unwrap().unwrap();
    let second = decoder.decode(&to_base64(b"{}")).unwrap().unwrap();
    let third = decoder.decode(&to_base64(b"plain words")).unwrap().unwrap();

    assert_eq!(first.content.kind(), ContentKind::Text);
    assert_eq!(second.content.kind(), ContentKind::Json);
    assert_eq!(first, third);
}
