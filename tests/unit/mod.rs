//! Unit Tests Module
//!
//! Component-level tests through the public API of each module.

pub mod codec;
pub mod data_url;
pub mod extension;
pub mod recent_files;
pub mod sniffer;
