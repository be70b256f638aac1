//! Shared helpers used by both the encode and decode paths.

pub mod base64_helpers;
