//! File extension resolution for exported blobs
//!
//! Resolution order:
//! 1. declared MIME through the [`MediaType`] registry
//! 2. declared MIME through the fixed fallback table
//! 3. bare `type/subtype` MIME: the subtype verbatim
//! 4. magic numbers on the decoded bytes
//! 5. `bin`
//!
//! Resolution never fails.

use super::signatures::{self, Signature};
use crate::types::media_type::MediaType;
use tracing::debug;

/// Extension used when nothing else matches
pub const DEFAULT_EXTENSION: &str = "bin";

/// Minimum number of bytes the magic-number step looks at
pub const MIN_MAGIC_BYTES: usize = 4;

const MIME_TO_EXTENSION: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("application/pdf", "pdf"),
    ("text/plain", "txt"),
    ("application/json", "json"),
    ("audio/mpeg", "mp3"),
    ("audio/wav", "wav"),
    ("audio/x-wav", "wav"),
    ("audio/mp4", "m4a"),
    ("video/mp4", "mp4"),
    ("application/zip", "zip"),
];

const MAGIC_TO_EXTENSION: &[(Signature, &str)] = &[
    (signatures::PNG, "png"),
    (signatures::JPEG, "jpg"),
    (signatures::GIF, "gif"),
    (signatures::PDF, "pdf"),
    (signatures::ZIP, "zip"),
    (signatures::RAR, "rar"),
    (signatures::SEVEN_ZIP, "7z"),
];

/// Best-guess extension (no leading dot) from a declared MIME and/or raw bytes
pub fn resolve_extension(declared_mime: Option<&str>, data: Option<&[u8]>) -> String {
    if let Some(mime) = declared_mime {
        if let Some(ext) = extension_for_mime(mime) {
            debug!("Resolved extension '{}' from MIME '{}'", ext, mime);
            return ext;
        }
    }

    if let Some(ext) = data.and_then(extension_for_magic) {
        debug!("Resolved extension '{}' from magic number", ext);
        return ext.to_string();
    }

    DEFAULT_EXTENSION.to_string()
}

/// MIME-only resolution: registry, fixed table, then bare subtype
pub fn extension_for_mime(mime: &str) -> Option<String> {
    let mime = mime.trim();

    if let Some(media) = MediaType::from_mime_type(mime) {
        return Some(media.extension().to_string());
    }

    let lowered = mime.to_ascii_lowercase();
    if let Some((_, ext)) = MIME_TO_EXTENSION.iter().find(|(m, _)| *m == lowered) {
        return Some(ext.to_string());
    }

    subtype_extension(mime).map(str::to_string)
}

/// Subtype of a `type/subtype` MIME without parameters
fn subtype_extension(mime: &str) -> Option<&str> {
    if mime.contains(';') {
        return None;
    }

    let (kind, subtype) = mime.split_once('/')?;
    if kind.is_empty() || subtype.is_empty() || subtype.contains('/') {
        return None;
    }

    Some(subtype)
}

/// Magic-number resolution; needs at least [`MIN_MAGIC_BYTES`] bytes
pub fn extension_for_magic(data: &[u8]) -> Option<&'static str> {
    if data.len() < MIN_MAGIC_BYTES {
        return None;
    }

    if let Some((_, ext)) = MAGIC_TO_EXTENSION.iter().find(|(sig, _)| sig.matches(data)) {
        return Some(ext);
    }

    if signatures::RIFF.matches(data) {
        return if signatures::RIFF_WAVE.matches(data) {
            Some("wav")
        } else {
            Some("webp")
        };
    }

    if signatures::ID3.matches(data) {
        return Some("mp3");
    }

    if signatures::FLAC.matches(data) {
        return Some("flac");
    }

    None
}
