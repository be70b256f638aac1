//! Shared input and store handling for CLI commands

use crate::config::AppConfig;
use crate::database::{InMemoryRecentFiles, RecentFilesStore, SqliteRecentFiles};
use crate::errors::{AppError, AppResult};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Resolve a command-line input argument to the text to decode
///
/// `-` reads standard input, a path to an existing file reads that file,
/// anything else is taken literally. Surrounding whitespace is trimmed.
pub async fn read_input(input: &str) -> AppResult<String> {
    let text = if input == "-" {
        debug!("Reading input from stdin");
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else if Path::new(input).is_file() {
        debug!("Reading input from file {}", input);
        tokio::fs::read_to_string(input).await.map_err(|e| {
            AppError::InvalidInput(format!("Cannot read input file {}: {}", input, e))
        })?
    } else {
        input.to_string()
    };

    Ok(text.trim().to_string())
}

/// Load configuration from fb64.toml and FB64_* environment variables
pub fn load_config() -> AppResult<AppConfig> {
    AppConfig::load()
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))
}

/// Open the configured recent-files store, or a throwaway one
pub fn open_recent_files(
    config: &AppConfig,
    no_history: bool,
) -> AppResult<Box<dyn RecentFilesStore>> {
    let capacity = config.storage.max_recent_files;
    if no_history {
        return Ok(Box::new(InMemoryRecentFiles::new(capacity)));
    }

    let path = &config.storage.recent_files_db;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Box::new(SqliteRecentFiles::open(path, capacity)?))
}
