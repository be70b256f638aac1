//! Encoding and conversion services
//!
//! - `encoder`: chunked base64 encoding of files and readers
//! - `converter`: encode/export operations that also record recent files
//! - `base`: progress throttling and formatting for long encodes

pub mod base;
pub mod converter;
pub mod encoder;

pub use base::*;
pub use converter::FileConverter;
pub use encoder::{ChunkedEncoder, EncoderError, EncoderResult, EncodingProgress};
