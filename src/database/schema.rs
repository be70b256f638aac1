//! Recent-files schema
//!
//! One row per list entry. `position` 0 is the most recent file; the whole
//! table is rewritten after every mutation so positions stay dense.

use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

pub const SCHEMA_VERSION: i64 = 1;

/// Create the recent-files table if it does not exist
pub fn setup_schema(connection: &Connection) -> AppResult<()> {
    connection.execute_batch(
        r#"
        PRAGMA user_version = 1;

        CREATE TABLE IF NOT EXISTS recent_files (
            position INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            size_bytes INTEGER NOT NULL,
            category TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;

    debug!("Recent-files schema ready (version {})", SCHEMA_VERSION);
    Ok(())
}
