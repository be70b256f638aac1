//! fb64 type system
//!
//! - `content_detection`: decoded bytes, content kinds and the ordered sniffer chain
//! - `media_type`: MIME type registry (MIME <-> extension <-> category)
//! - `file_info`: file-manager descriptors for the recent-files list

pub mod content_detection;
pub mod file_info;
pub mod media_type;

pub use content_detection::{ClassifiedContent, ContentKind, ContentSniffer, DecodedBytes};
pub use file_info::{FileCategory, FileDescriptor};
pub use media_type::MediaType;
