//! Common Test Utilities
//!
//! Shared fixtures and setup used across the unit and integration test files.

#![allow(dead_code)]

use fb64::config::AppConfig;
use fb64::shared::base64_helpers;
use tempfile::TempDir;

/// Binary fixtures built at test time
pub mod fixtures {
    use std::io::Cursor;

    /// A valid 2x2 PNG produced by the `image` encoder
    pub fn tiny_png() -> anyhow::Result<Vec<u8>> {
        encode_image(image::ImageFormat::Png)
    }

    /// A valid 2x2 GIF produced by the `image` encoder
    pub fn tiny_gif() -> anyhow::Result<Vec<u8>> {
        encode_image(image::ImageFormat::Gif)
    }

    fn encode_image(format: image::ImageFormat) -> anyhow::Result<Vec<u8>> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 30, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format)?;
        Ok(out.into_inner())
    }

    /// PNG magic followed by bytes that are not a PNG stream
    pub fn corrupt_png() -> Vec<u8> {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0xFF, 0x13]);
        data
    }

    /// RIFF/WAVE header with a non-UTF-8 size field, so it is not read as text
    pub fn wav_header() -> Vec<u8> {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&[0x24, 0xF0, 0x00, 0x00]);
        data.extend_from_slice(b"WAVEfmt ");
        data.extend_from_slice(&[0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00]);
        data
    }

    /// ID3v2 tag header followed by non-UTF-8 frame data
    pub fn mp3_with_id3() -> Vec<u8> {
        let mut data = b"ID3".to_vec();
        data.extend_from_slice(&[0x04, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x76, 0xFF, 0xFB, 0x90]);
        data
    }

    /// Deterministic pseudo-random bytes
    pub fn sample_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 31 + 7) % 256) as u8).collect()
    }
}

/// Standard base64 of `data`
pub fn to_base64(data: &[u8]) -> String {
    base64_helpers::encode(data)
}

/// `data:<mime>;base64,<payload>`
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, to_base64(data))
}

/// Configuration rooted in a scratch directory, with no pause between chunks
pub fn test_config(temp_dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.encoder.yield_interval_ms = 0;
    config.storage.recent_files_db = temp_dir.path().join("recent.db");
    config.export.output_dir = temp_dir.path().join("decoded");
    config
}
