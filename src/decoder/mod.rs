//! Base64 decode pipeline
//!
//! Pasted input flows through three steps:
//! - data-URL normalisation (strip `data:<mime>;base64,`)
//! - strict base64 decoding
//! - content sniffing into a `ContentKind`
//!
//! Empty payloads are the "no content yet" state and decode to `Ok(None)`.
//! Every call reclassifies from scratch; nothing is cached between inputs.

use tracing::{debug, info};

use crate::detection::resolve_extension;
use crate::shared::base64_helpers;
use crate::types::content_detection::{ClassifiedContent, ContentSniffer, DecodedBytes};

pub mod data_url;
pub mod error;
pub mod output;

pub use data_url::{normalize, EncodedPayload};
pub use error::{DecoderError, DecoderResult};
pub use output::{OutputError, OutputManager};

/// Classified content plus what the data-URL header declared about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedContent {
    pub content: ClassifiedContent,
    pub declared_mime: Option<String>,
}

impl DecodedContent {
    /// Extension a saved copy of this content would get
    pub fn extension(&self) -> String {
        resolve_extension(
            self.declared_mime.as_deref(),
            Some(self.content.bytes().as_slice()),
        )
    }
}

/// Payload bytes that decoded successfully but were not classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDecoded {
    pub declared_mime: Option<String>,
    pub bytes: DecodedBytes,
}

/// Decodes pasted base64 / data-URL input and classifies the result
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentDecoder {
    sniffer: ContentSniffer,
}

impl ContentDecoder {
    pub fn new(sniffer: ContentSniffer) -> Self {
        Self { sniffer }
    }

    pub fn sniffer(&self) -> &ContentSniffer {
        &self.sniffer
    }

    /// Normalise and decode without classifying
    ///
    /// Returns `Ok(None)` when the payload is empty.
    pub fn decode_bytes(&self, input: &str) -> DecoderResult<Option<RawDecoded>> {
        let payload = normalize(input);
        if payload.is_empty() {
            debug!("Empty payload, nothing to decode");
            return Ok(None);
        }

        let bytes = base64_helpers::decode(&payload.raw)?;
        debug!(
            "Decoded {} base64 chars into {} bytes (declared MIME: {:?})",
            payload.raw.len(),
            bytes.len(),
            payload.declared_mime
        );

        Ok(DecodedBytes::new(bytes).map(|bytes| RawDecoded {
            declared_mime: payload.declared_mime,
            bytes,
        }))
    }

    /// Normalise, decode and classify
    ///
    /// - `Ok(None)`: empty input, no content
    /// - `Err(InvalidBase64)`: payload is not valid base64
    /// - `Err(UnsupportedContent)`: decoded, but no kind matched
    pub fn decode(&self, input: &str) -> DecoderResult<Option<DecodedContent>> {
        let Some(raw) = self.decode_bytes(input)? else {
            return Ok(None);
        };

        let content = self.sniffer.classify(raw.bytes)?;
        info!(
            "Decoded content: {} ({} bytes)",
            content.kind(),
            content.len()
        );

        Ok(Some(DecodedContent {
            content,
            declared_mime: raw.declared_mime,
        }))
    }
}

/// Decode and classify with the default sniffer
pub fn decode_content(input: &str) -> DecoderResult<Option<ClassifiedContent>> {
    Ok(ContentDecoder::default()
        .decode(input)?
        .map(|decoded| decoded.content))
}
