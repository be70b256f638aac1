//! Media type registry
//!
//! Maps MIME strings to known media formats and their preferred file
//! extensions. The extension resolver consults this registry first, before
//! its own fixed table, so it acts as the crate's type-identifier system.
//!
//! ## Usage
//!
//! ```rust
//! use fb64::types::media_type::{AudioFormat, MediaType};
//!
//! let media = MediaType::from_mime_type("audio/wav").unwrap();
//! assert_eq!(media, MediaType::Audio(AudioFormat::Wav));
//! assert_eq!(media.extension(), "wav");
//! ```

use crate::types::file_info::FileCategory;
use serde::{Deserialize, Serialize};

/// Image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Svg,
    Bmp,
    Tiff,
    Ico,
    Heic,
    Avif,
}

/// Audio formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
    Aac,
    Ogg,
    Flac,
}

/// Video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoFormat {
    Mp4,
    QuickTime,
    WebM,
    Mkv,
    Avi,
}

/// Document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
    Json,
    Xml,
    Html,
    Csv,
}

/// Archive formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveFormat {
    Zip,
    Rar,
    SevenZip,
    Gzip,
    Tar,
}

/// Registered media type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Image(ImageFormat),
    Audio(AudioFormat),
    Video(VideoFormat),
    Document(DocumentFormat),
    Archive(ArchiveFormat),
}

impl MediaType {
    /// Look up a MIME string (case-insensitive, parameters ignored)
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or(mime_type)
            .trim()
            .to_ascii_lowercase();

        let media = match essence.as_str() {
            "image/png" => MediaType::Image(ImageFormat::Png),
            "image/jpeg" | "image/jpg" | "image/pjpeg" => MediaType::Image(ImageFormat::Jpeg),
            "image/gif" => MediaType::Image(ImageFormat::Gif),
            "image/webp" => MediaType::Image(ImageFormat::WebP),
            "image/svg+xml" => MediaType::Image(ImageFormat::Svg),
            "image/bmp" | "image/x-ms-bmp" => MediaType::Image(ImageFormat::Bmp),
            "image/tiff" => MediaType::Image(ImageFormat::Tiff),
            "image/x-icon" | "image/vnd.microsoft.icon" => MediaType::Image(ImageFormat::Ico),
            "image/heic" | "image/heif" => MediaType::Image(ImageFormat::Heic),
            "image/avif" => MediaType::Image(ImageFormat::Avif),
            "audio/mpeg" | "audio/mp3" => MediaType::Audio(AudioFormat::Mp3),
            "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave" => {
                MediaType::Audio(AudioFormat::Wav)
            }
            "audio/mp4" | "audio/x-m4a" | "audio/m4a" => MediaType::Audio(AudioFormat::M4a),
            "audio/aac" | "audio/x-aac" => MediaType::Audio(AudioFormat::Aac),
            "audio/ogg" | "application/ogg" => MediaType::Audio(AudioFormat::Ogg),
            "audio/flac" | "audio/x-flac" => MediaType::Audio(AudioFormat::Flac),
            "video/mp4" => MediaType::Video(VideoFormat::Mp4),
            "video/quicktime" => MediaType::Video(VideoFormat::QuickTime),
            "video/webm" => MediaType::Video(VideoFormat::WebM),
            "video/x-matroska" => MediaType::Video(VideoFormat::Mkv),
            "video/x-msvideo" => MediaType::Video(VideoFormat::Avi),
            "application/pdf" => MediaType::Document(DocumentFormat::Pdf),
            "text/plain" => MediaType::Document(DocumentFormat::PlainText),
            "application/json" | "text/json" => MediaType::Document(DocumentFormat::Json),
            "application/xml" | "text/xml" => MediaType::Document(DocumentFormat::Xml),
            "text/html" => MediaType::Document(DocumentFormat::Html),
            "text/csv" => MediaType::Document(DocumentFormat::Csv),
            "application/zip" | "application/x-zip-compressed" => {
                MediaType::Archive(ArchiveFormat::Zip)
            }
            "application/x-rar-compressed" | "application/vnd.rar" => {
                MediaType::Archive(ArchiveFormat::Rar)
            }
            "application/x-7z-compressed" => MediaType::Archive(ArchiveFormat::SevenZip),
            "application/gzip" | "application/x-gzip" => MediaType::Archive(ArchiveFormat::Gzip),
            "application/x-tar" => MediaType::Archive(ArchiveFormat::Tar),
            _ => return None,
        };

        Some(media)
    }

    /// Preferred file extension, without a leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Image(fmt) => match fmt {
                ImageFormat::Png => "png",
                ImageFormat::Jpeg => "jpg",
                ImageFormat::Gif => "gif",
                ImageFormat::WebP => "webp",
                ImageFormat::Svg => "svg",
                ImageFormat::Bmp => "bmp",
                ImageFormat::Tiff => "tiff",
                ImageFormat::Ico => "ico",
                ImageFormat::Heic => "heic",
                ImageFormat::Avif => "avif",
            },
            MediaType::Audio(fmt) => match fmt {
                AudioFormat::Mp3 => "mp3",
                AudioFormat::Wav => "wav",
                AudioFormat::M4a => "m4a",
                AudioFormat::Aac => "aac",
                AudioFormat::Ogg => "ogg",
                AudioFormat::Flac => "flac",
            },
            MediaType::Video(fmt) => match fmt {
                VideoFormat::Mp4 => "mp4",
                VideoFormat::QuickTime => "mov",
                VideoFormat::WebM => "webm",
                VideoFormat::Mkv => "mkv",
                VideoFormat::Avi => "avi",
            },
            MediaType::Document(fmt) => match fmt {
                DocumentFormat::Pdf => "pdf",
                DocumentFormat::PlainText => "txt",
                DocumentFormat::Json => "json",
                DocumentFormat::Xml => "xml",
                DocumentFormat::Html => "html",
                DocumentFormat::Csv => "csv",
            },
            MediaType::Archive(fmt) => match fmt {
                ArchiveFormat::Zip => "zip",
                ArchiveFormat::Rar => "rar",
                ArchiveFormat::SevenZip => "7z",
                ArchiveFormat::Gzip => "gz",
                ArchiveFormat::Tar => "tar",
            },
        }
    }

    /// Coarse file-manager category
    pub fn category(&self) -> FileCategory {
        FileCategory::from_extension(self.extension())
    }
}
