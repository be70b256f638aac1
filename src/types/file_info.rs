//! File-manager descriptors for the recent-files list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Coarse category used for file-manager style display
///
/// Independent of the sniffer's `ContentKind`: it is derived from the file
/// extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    Image,
    Audio,
    Video,
    Document,
    Archive,
    Other,
}

impl FileCategory {
    pub const ALL: [FileCategory; 6] = [
        FileCategory::Image,
        FileCategory::Audio,
        FileCategory::Video,
        FileCategory::Document,
        FileCategory::Archive,
        FileCategory::Other,
    ];

    /// Extensions (lowercase, no dot) that belong to this category
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            FileCategory::Image => &["jpg", "jpeg", "png", "gif", "heic", "webp"],
            FileCategory::Audio => &["mp3", "wav", "m4a", "aac", "flac", "ogg"],
            FileCategory::Video => &["mp4", "mov", "avi", "mkv", "webm"],
            FileCategory::Document => &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"],
            FileCategory::Archive => &["zip", "rar", "7z", "tar", "gz"],
            FileCategory::Other => &[],
        }
    }

    /// Category for an extension, case-insensitive; unknown extensions map to `Other`
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.file_extensions().contains(&ext.as_str()))
            .unwrap_or(FileCategory::Other)
    }

    /// Category for a path, based on its extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileCategory::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Document => "Document",
            FileCategory::Archive => "Archive",
            FileCategory::Other => "Other",
        }
    }

    /// Parse the stored representation back; unknown strings become `Other`
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or(FileCategory::Other)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file that was encoded or exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: i64,
    pub category: FileCategory,
    pub created_at: DateTime<Utc>,
}

impl FileDescriptor {
    /// Descriptor for `name`, categorised by its extension, stamped now
    pub fn new(name: impl Into<String>, size_bytes: i64) -> Self {
        let name = name.into();
        let category = FileCategory::from_path(Path::new(&name));
        Self {
            name,
            size_bytes,
            category,
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn display_size(&self) -> String {
        crate::utils::size::format_byte_count(self.size_bytes)
    }

    pub fn display_date(&self) -> String {
        crate::utils::time::format_timestamp(&self.created_at)
    }
}
