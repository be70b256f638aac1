//! Recent-files persistence
//!
//! ## Architecture
//!
//! - `Database` - thin SQLite connection wrapper with transaction support
//! - `RecentFilesStore` - the trait the converter records files through
//! - `SqliteRecentFiles` / `InMemoryRecentFiles` - its two implementations

pub mod recent_files;
pub mod schema;
pub mod traits;

pub use recent_files::{InMemoryRecentFiles, SqliteRecentFiles};
pub use schema::setup_schema;
pub use traits::RecentFilesStore;

use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::info;

/// SQLite connection with the recent-files schema applied
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open the database at `database_path` and initialise the schema
    pub fn new(database_path: &str) -> AppResult<Self> {
        let connection = Connection::open(database_path)?;

        setup_schema(&connection)?;

        info!("Database initialised at: {}", database_path);
        Ok(Self { connection })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Execute a function within a database transaction
    pub fn execute_transaction<F, R>(&mut self, f: F) -> AppResult<R>
    where
        F: FnOnce(&rusqlite::Transaction) -> AppResult<R>,
    {
        let tx = self.connection.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}
