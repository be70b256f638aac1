//! Data-URL normalisation
//!
//! Strips an optional `data:<mime>[;params];base64,` header from pasted input.
//! This is a textual scan for the first `base64,` token, not a data-URL
//! grammar; loosely formed headers are accepted.

use serde::{Deserialize, Serialize};

const BASE64_TOKEN: &str = "base64,";
const DATA_SCHEME: &str = "data:";

/// Base64 payload with the data-URL header removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    /// Payload text after the first `base64,` (or the whole input)
    pub raw: String,
    /// MIME type from the `data:` header, if one was present
    pub declared_mime: Option<String>,
}

impl EncodedPayload {
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Split input into a clean payload and an optional declared MIME type
///
/// # Example
/// ```
/// use fb64::decoder::data_url::normalize;
/// let payload = normalize("data:image/png;base64,iVBORw0KG");
/// assert_eq!(payload.raw, "iVBORw0KG");
/// assert_eq!(payload.declared_mime.as_deref(), Some("image/png"));
/// ```
pub fn normalize(input: &str) -> EncodedPayload {
    let Some(token_start) = input.find(BASE64_TOKEN) else {
        return EncodedPayload {
            raw: input.to_string(),
            declared_mime: None,
        };
    };

    let header = &input[..token_start];
    let raw = input[token_start + BASE64_TOKEN.len()..].to_string();

    EncodedPayload {
        raw,
        declared_mime: declared_mime(header),
    }
}

/// MIME between `data:` and the first `;`, or the whole header when there is no `;`
fn declared_mime(header: &str) -> Option<String> {
    let rest = header.strip_prefix(DATA_SCHEME)?;
    let mime = match rest.find(';') {
        Some(end) => &rest[..end],
        // `data:text/plain,base64,...` leaves the separator comma behind
        None => rest.trim_end_matches(','),
    };

    if mime.is_empty() {
        None
    } else {
        Some(mime.to_string())
    }
}
