//! Integration Tests Module
//!
//! End-to-end tests across the normaliser, codec, sniffer, resolver,
//! encoder and recent-files store.

pub mod cli_smoke;
pub mod decode_pipeline;
pub mod encode_pipeline;
