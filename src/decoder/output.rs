use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Output-specific error types
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}

/// Writes decoded blobs into an output directory
///
/// Files are named `<stem>.<extension>`; the directory is created on first
/// write.
pub struct OutputManager {
    base_dir: PathBuf,
}

impl OutputManager {
    /// Create a new OutputManager with the specified base directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base output directory path
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a blob with this stem and extension would be written to
    pub fn file_path(&self, stem: &str, extension: &str) -> OutputResult<PathBuf> {
        validate_component(stem)?;
        validate_component(extension)?;
        Ok(self.base_dir.join(format!("{}.{}", stem, extension)))
    }

    /// Write decoded data, creating `<base_dir>/<stem>.<extension>`
    pub fn write_decoded(&self, stem: &str, extension: &str, data: &[u8]) -> OutputResult<PathBuf> {
        let filepath = self.file_path(stem, extension)?;
        self.ensure_directory_exists(&self.base_dir)?;

        fs::write(&filepath, data)?;
        info!("Wrote {} bytes to {}", data.len(), filepath.display());
        Ok(filepath)
    }

    /// Check if a file with this stem and extension already exists
    pub fn file_exists(&self, stem: &str, extension: &str) -> bool {
        self.file_path(stem, extension)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Ensure a directory exists, creating it if necessary
    fn ensure_directory_exists(&self, dir: &Path) -> OutputResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Stems and extensions must stay inside the output directory
fn validate_component(component: &str) -> OutputResult<()> {
    if component.is_empty()
        || component == "."
        || component == ".."
        || component.contains(['/', '\\', '\0'])
    {
        return Err(OutputError::InvalidPath(component.to_string()));
    }
    Ok(())
}
