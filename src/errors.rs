use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Recent-files database operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid CLI or user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Base64 decoding and content classification
    #[error(transparent)]
    Decoder(#[from] crate::decoder::DecoderError),

    /// Chunked encoding
    #[error(transparent)]
    Encoder(#[from] crate::processor::EncoderError),

    /// Writing decoded files
    #[error("Output error: {0}")]
    Output(#[from] crate::decoder::output::OutputError),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Decoder(crate::decoder::DecoderError::InvalidBase64(err))
    }
}
