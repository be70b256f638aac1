//! Recent-files store implementations

use super::traits::{push_front, RecentFilesStore};
use super::Database;
use crate::errors::AppResult;
use crate::types::{FileCategory, FileDescriptor};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Row};
use std::path::Path;
use tracing::{debug, info};

/// SQLite-backed recent-files list
///
/// The list is loaded once when the store is opened and kept in memory; every
/// `add` rewrites the table inside a single transaction.
pub struct SqliteRecentFiles {
    db: Database,
    entries: Vec<FileDescriptor>,
    capacity: usize,
}

impl SqliteRecentFiles {
    /// Open (or create) the store at `path`
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> AppResult<Self> {
        let db = Database::new(&path.as_ref().to_string_lossy())?;
        Self::with_database(db, capacity)
    }

    /// Store backed by a private in-memory database
    pub fn open_in_memory(capacity: usize) -> AppResult<Self> {
        Self::with_database(Database::new(":memory:")?, capacity)
    }

    fn with_database(db: Database, capacity: usize) -> AppResult<Self> {
        let entries = load_entries(&db, capacity)?;
        info!("Loaded {} recent files", entries.len());
        Ok(Self {
            db,
            entries,
            capacity,
        })
    }

    /// Replace the stored list with `entries` in one transaction
    fn save(&mut self, entries: &[FileDescriptor]) -> AppResult<()> {
        self.db.execute_transaction(|tx| {
            tx.execute("DELETE FROM recent_files", [])?;
            let mut stmt = tx.prepare_cached(
                "INSERT INTO recent_files (position, name, size_bytes, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, entry) in entries.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    entry.name,
                    entry.size_bytes,
                    entry.category.as_str(),
                    entry
                        .created_at
                        .to_rfc3339_opts(SecondsFormat::Nanos, true),
                ])?;
            }
            Ok(())
        })?;

        debug!("Saved {} recent files", entries.len());
        Ok(())
    }
}

impl RecentFilesStore for SqliteRecentFiles {
    fn add(&mut self, descriptor: FileDescriptor) -> AppResult<()> {
        debug!("Adding {} to recent files", descriptor.name);
        let mut updated = self.entries.clone();
        push_front(&mut updated, descriptor, self.capacity);

        // memory only follows a committed write
        self.save(&updated)?;
        self.entries = updated;
        Ok(())
    }

    fn list(&self) -> &[FileDescriptor] {
        &self.entries
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

fn load_entries(db: &Database, capacity: usize) -> AppResult<Vec<FileDescriptor>> {
    let mut stmt = db.connection().prepare(
        "SELECT name, size_bytes, category, created_at
         FROM recent_files
         ORDER BY position
         LIMIT ?1",
    )?;
    let entries = stmt
        .query_map(params![capacity as i64], descriptor_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Columns: name, size_bytes, category, created_at (RFC 3339)
fn descriptor_from_row(row: &Row) -> rusqlite::Result<FileDescriptor> {
    let created_at: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(FileDescriptor {
        name: row.get(0)?,
        size_bytes: row.get(1)?,
        category: FileCategory::parse(&row.get::<_, String>(2)?),
        created_at,
    })
}

/// Non-persistent recent-files list
#[derive(Debug, Clone)]
pub struct InMemoryRecentFiles {
    entries: Vec<FileDescriptor>,
    capacity: usize,
}

impl InMemoryRecentFiles {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

impl Default for InMemoryRecentFiles {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_RECENT_FILES)
    }
}

impl RecentFilesStore for InMemoryRecentFiles {
    fn add(&mut self, descriptor: FileDescriptor) -> AppResult<()> {
        push_front(&mut self.entries, descriptor, self.capacity);
        Ok(())
    }

    fn list(&self) -> &[FileDescriptor] {
        &self.entries
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
