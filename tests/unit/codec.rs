//! Base64 codec round-trip and rejection behaviour

use crate::common::fixtures;
use fb64::shared::base64_helpers::{decode, encode, encoded_len};

#[test]
fn test_roundtrip_across_padding_lengths() {
    for len in 0..=9 {
        let data = fixtures::sample_bytes(len);
        let encoded = encode(&data);
        assert_eq!(encoded.len(), encoded_len(len));
        assert_eq!(decode(&encoded).unwrap(), data, "length {}", len);
    }
}

#[test]
fn test_known_vectors() {
    assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(decode("eyJhIjoxfQ==").unwrap(), br#"{"a":1}"#);
}

#[test]
fn test_rejects_non_alphabet_and_whitespace() {
    for input in ["not-base64!!", "aGVs bG8=", "aGVsbG8=\n", "Zg="] {
        assert!(decode(input).is_err(), "{:?} should be rejected", input);
    }
}

#[test]
fn test_url_safe_alphabet_rejected() {
    // 0xFB 0xFF encodes to "-_8=" in the URL-safe alphabet
    assert_eq!(encode(&[0xFB, 0xFF]), "+/8=");
    assert!(decode("-_8=").is_err());
}
