//! Magic-number detection shared by the sniffer and the extension resolver.

pub mod extension;
pub mod signatures;

// Re-export for convenience
pub use extension::{resolve_extension, DEFAULT_EXTENSION};
pub use signatures::Signature;
