//! fb64 - base64 file converter
//!
//! Decodes pasted base64 and data URLs, classifies what came out, resolves a
//! file extension for it, and encodes files back to base64 in chunks.

pub mod cli;
pub mod config;
pub mod database;
pub mod decoder;
pub mod detection;
pub mod errors;
pub mod processor;
pub mod shared;
pub mod types;
pub mod utils;
