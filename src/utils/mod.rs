//! Formatting helpers shared by the CLI and the data model.

pub mod size;
pub mod time;
