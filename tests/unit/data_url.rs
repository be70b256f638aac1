//! Data-URL header stripping

use fb64::decoder::normalize;

#[test]
fn test_plain_base64_passes_through() {
    let payload = normalize("aGVsbG8=");
    assert_eq!(payload.raw, "aGVsbG8=");
    assert_eq!(payload.declared_mime, None);
}

#[test]
fn test_data_url_header_removed() {
    let payload = normalize("data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(payload.raw, "iVBORw0KGgo=");
    assert_eq!(payload.declared_mime.as_deref(), Some("image/png"));
}

#[test]
fn test_extra_parameters_ignored() {
    let payload = normalize("data:text/plain;charset=utf-8;base64,aGk=");
    assert_eq!(payload.raw, "aGk=");
    assert_eq!(payload.declared_mime.as_deref(), Some("text/plain"));
}

#[test]
fn test_only_first_token_is_split() {
    let payload = normalize("data:text/plain;base64,base64,aGk=");
    assert_eq!(payload.raw, "base64,aGk=");
}

#[test]
fn test_header_without_data_scheme() {
    let payload = normalize("junk;base64,aGk=");
    assert_eq!(payload.raw, "aGk=");
    assert_eq!(payload.declared_mime, None);
}

#[test]
fn test_empty_payload_after_header() {
    let payload = normalize("data:audio/wav;base64,");
    assert!(payload.is_empty());
    assert_eq!(payload.declared_mime.as_deref(), Some("audio/wav"));
}
