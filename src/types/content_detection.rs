//! Content Type Detection
//!
//! Classifies decoded bytes into a [`ContentKind`] for previewing. Detection is
//! an explicit, ordered chain of pure predicates; the first predicate that
//! accepts the bytes decides the kind.
//!
//! ## Precedence
//!
//! 1. **Image**: the bytes must fully decode as a raster image. A PNG/JPEG/GIF
//!    magic number followed by garbage is not an image.
//! 2. **Json**: any well-formed JSON value.
//! 3. **Text**: valid UTF-8. Valid JSON never reaches this step.
//! 4. **Audio**: container or tag signature at the start of the data.
//!
//! Anything else is unsupported. `Pdf` is only produced when the sniffer is
//! built with PDF detection enabled, which inserts a `%PDF` check right after
//! the image step.
//!
//! ## Usage
//!
//! ```rust
//! use fb64::types::content_detection::{ContentKind, ContentSniffer};
//!
//! let sniffer = ContentSniffer::new();
//! assert_eq!(sniffer.detect(b"{}"), Some(ContentKind::Json));
//! assert_eq!(sniffer.detect(b"hello"), Some(ContentKind::Text));
//! ```

use crate::decoder::error::{DecoderError, DecoderResult};
use crate::detection::signatures;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Kinds of previewable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Image,
    Text,
    Json,
    Pdf,
    Audio,
}

impl ContentKind {
    pub fn title(&self) -> &'static str {
        match self {
            ContentKind::Image => "Image",
            ContentKind::Text => "Text",
            ContentKind::Json => "JSON",
            ContentKind::Pdf => "PDF",
            ContentKind::Audio => "Audio",
        }
    }

    /// Kinds whose bytes render as a text preview
    pub fn is_textual(&self) -> bool {
        matches!(self, ContentKind::Text | ContentKind::Json)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Non-empty, immutable decoded buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBytes(Vec<u8>);

impl DecodedBytes {
    /// Wrap a buffer; empty buffers are "no content" and yield `None`
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for DecodedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Bytes together with the kind they were classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedContent {
    kind: ContentKind,
    bytes: DecodedBytes,
}

impl ClassifiedContent {
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn bytes(&self) -> &DecodedBytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// UTF-8 text for Text and Json content, without a leading byte order mark
    pub fn text(&self) -> Option<&str> {
        if self.kind.is_textual() {
            std::str::from_utf8(strip_bom(self.bytes.as_slice())).ok()
        } else {
            None
        }
    }

    /// First `max_chars` characters of textual content, with `...` when cut
    pub fn text_preview(&self, max_chars: usize) -> Option<String> {
        let text = self.text()?;
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => Some(format!("{}...", &text[..cut])),
            None => Some(text.to_string()),
        }
    }}

/// A single detection step
pub type Probe = fn(&[u8]) -> bool;

const DEFAULT_CHAIN: &[(ContentKind, Probe)] = &[
    (ContentKind::Image, is_image),
    (ContentKind::Json, is_json),
    (ContentKind::Text, is_text),
    (ContentKind::Audio, signatures::is_audio),
];

const PDF_AWARE_CHAIN: &[(ContentKind, Probe)] = &[
    (ContentKind::Image, is_image),
    (ContentKind::Pdf, is_pdf),
    (ContentKind::Json, is_json),
    (ContentKind::Text, is_text),
    (ContentKind::Audio, signatures::is_audio),
];

/// Ordered predicate chain that assigns exactly one kind per classification
#[derive(Clone, Copy)]
pub struct ContentSniffer {
    chain: &'static [(ContentKind, Probe)],
}

impl fmt::Debug for ContentSniffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSniffer")
            .field("precedence", &self.precedence())
            .finish()
    }
}

impl Default for ContentSniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSniffer {
    /// Image, Json, Text, Audio
    pub fn new() -> Self {
        Self {
            chain: DEFAULT_CHAIN,
        }
    }

    /// Image, Pdf, Json, Text, Audio when enabled, otherwise the default chain
    pub fn with_pdf_detection(enabled: bool) -> Self {
        if enabled {
            Self {
                chain: PDF_AWARE_CHAIN,
            }
        } else {
            Self::new()
        }
    }

    /// Kinds in the order they are tried
    pub fn precedence(&self) -> Vec<ContentKind> {
        self.chain.iter().map(|(kind, _)| *kind).collect()
    }

    /// First kind whose predicate accepts the data
    pub fn detect(&self, data: &[u8]) -> Option<ContentKind> {
        if data.is_empty() {
            return None;
        }

        self.chain
            .iter()
            .find(|(_, probe)| probe(data))
            .map(|(kind, _)| *kind)
    }

    /// Classify decoded bytes, failing with `UnsupportedContent` when nothing matches
    pub fn classify(&self, bytes: DecodedBytes) -> DecoderResult<ClassifiedContent> {
        match self.detect(bytes.as_slice()) {
            Some(kind) => {
                debug!("Classified {} bytes as {}", bytes.len(), kind);
                Ok(ClassifiedContent { kind, bytes })
            }
            None => {
                debug!("No content kind matched {} bytes", bytes.len());
                Err(DecoderError::UnsupportedContent)
            }
        }
    }
}

/// Full decode through the `image` crate; magic bytes alone are not enough
pub fn is_image(data: &[u8]) -> bool {
    image::load_from_memory(data).is_ok()
}

/// Any well-formed JSON value, scalars included; a UTF-8 BOM may precede it
pub fn is_json(data: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(strip_bom(data)).is_ok()
}

/// Strict UTF-8
pub fn is_text(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok()
}

/// `%PDF` header at the start of the data
pub fn is_pdf(data: &[u8]) -> bool {
    signatures::PDF.matches(data)
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}
