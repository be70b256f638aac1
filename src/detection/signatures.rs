//! Magic-number signatures
//!
//! Fixed byte sequences at known offsets, shared by the content sniffer
//! (audio step) and the extension resolver (magic-number fallback).

/// A magic number expected at `offset` bytes into the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub offset: usize,
    pub magic: &'static [u8],
}

impl Signature {
    pub const fn at_start(magic: &'static [u8]) -> Self {
        Self { offset: 0, magic }
    }

    pub const fn at(offset: usize, magic: &'static [u8]) -> Self {
        Self { offset, magic }
    }

    /// True when the data is long enough and carries the magic at the offset
    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.magic.len())
            .is_some_and(|window| window == self.magic)
    }
}

// Images
pub const PNG: Signature = Signature::at_start(&[0x89, 0x50, 0x4E, 0x47]);
pub const JPEG: Signature = Signature::at_start(&[0xFF, 0xD8, 0xFF]);
pub const GIF: Signature = Signature::at_start(&[0x47, 0x49, 0x46]);

// Documents and archives
pub const PDF: Signature = Signature::at_start(&[0x25, 0x50, 0x44, 0x46]);
pub const ZIP: Signature = Signature::at_start(&[0x50, 0x4B, 0x03, 0x04]);
pub const RAR: Signature = Signature::at_start(&[0x52, 0x61, 0x72, 0x21]);
pub const SEVEN_ZIP: Signature = Signature::at_start(&[0x37, 0x7A, 0xBC, 0xAF]);

// Audio and containers
pub const RIFF: Signature = Signature::at_start(&[0x52, 0x49, 0x46, 0x46]);
/// `WAVE` form type inside a RIFF header
pub const RIFF_WAVE: Signature = Signature::at(8, &[0x57, 0x41, 0x56, 0x45]);
pub const ID3: Signature = Signature::at_start(&[0x49, 0x44, 0x33]);
pub const MP3_FRAME_SYNC: Signature = Signature::at_start(&[0xFF, 0xFB]);
/// `ftypM4A` box at offset 4
pub const M4A: Signature = Signature::at(4, &[0x66, 0x74, 0x79, 0x70, 0x4D, 0x34, 0x41]);
pub const OGG: Signature = Signature::at_start(&[0x4F, 0x67, 0x67, 0x53]);
pub const EBML: Signature = Signature::at_start(&[0x1A, 0x45, 0xDF, 0xA3]);
pub const FLAC: Signature = Signature::at_start(&[0x66, 0x4C, 0x61, 0x43]);

/// Prefixes the sniffer accepts as audio
pub const AUDIO_SIGNATURES: &[Signature] = &[RIFF, ID3, MP3_FRAME_SYNC, M4A, OGG, EBML];

/// True when the data carries any known audio signature
pub fn is_audio(data: &[u8]) -> bool {
    AUDIO_SIGNATURES.iter().any(|sig| sig.matches(data))
}
