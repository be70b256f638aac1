use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default encoder chunk size (1 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 1_048_576;

/// Default pause between encoded chunks
pub const DEFAULT_YIELD_INTERVAL_MS: u64 = 10;

/// Default capacity of the recent-files list
pub const DEFAULT_MAX_RECENT_FILES: usize = 10;

/// Application configuration loaded from fb64.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub encoder: EncoderConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
    pub sniffer: SnifferConfig,
}

/// Chunked encoder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub chunk_size: usize,
    pub yield_interval_ms: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            yield_interval_ms: DEFAULT_YIELD_INTERVAL_MS,
        }
    }
}

impl EncoderConfig {
    pub fn yield_interval(&self) -> Duration {
        Duration::from_millis(self.yield_interval_ms)
    }
}

/// Recent-files persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub recent_files_db: PathBuf,
    pub max_recent_files: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            recent_files_db: PathBuf::from("./fb64_recent.db"),
            max_recent_files: DEFAULT_MAX_RECENT_FILES,
        }
    }
}

/// Where decoded files are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./decoded"),
        }
    }
}

/// Content sniffer switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnifferConfig {
    /// Check for a `%PDF` header right after the image probe
    pub detect_pdf: bool,
}

impl AppConfig {
    /// Load configuration from fb64.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let encoder = EncoderConfig::default();
        let storage = StorageConfig::default();
        let export = ExportConfig::default();

        let config = Config::builder()
            .set_default("encoder.chunk_size", encoder.chunk_size as i64)?
            .set_default("encoder.yield_interval_ms", encoder.yield_interval_ms)?
            .set_default(
                "storage.recent_files_db",
                storage.recent_files_db.to_string_lossy().to_string(),
            )?
            .set_default("storage.max_recent_files", storage.max_recent_files as i64)?
            .set_default(
                "export.output_dir",
                export.output_dir.to_string_lossy().to_string(),
            )?
            .set_default("sniffer.detect_pdf", false)?
            // Load from fb64.toml if it exists
            .add_source(File::with_name("fb64").required(false))
            // FB64_ENCODER__CHUNK_SIZE, FB64_EXPORT__OUTPUT_DIR, ...
            .add_source(
                config::Environment::with_prefix("FB64")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.encoder.chunk_size == 0 {
            return Err(ConfigError::Message(
                "encoder.chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.storage.max_recent_files == 0 {
            return Err(ConfigError::Message(
                "storage.max_recent_files must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            encoder: EncoderConfig::default(),
            storage: StorageConfig::default(),
            export: ExportConfig::default(),
            sniffer: SnifferConfig::default(),
        }
    }
}
