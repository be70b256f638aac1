//! Decoder-specific error types

/// Result type for decoder operations
pub type DecoderResult<T> = Result<T, DecoderError>;

/// Decoder-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    /// Payload contains characters outside the base64 alphabet or bad padding
    #[error("Invalid base64 string: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Nothing left to decode once the data-URL header is stripped
    #[error("Invalid base64 string: empty payload")]
    EmptyPayload,

    /// Payload decoded but no sniffer recognised it
    #[error("Unable to decode content. Unsupported format.")]
    UnsupportedContent,
}

impl DecoderError {
    /// Short message suitable for showing in place of a preview
    pub fn user_message(&self) -> &'static str {
        match self {
            DecoderError::InvalidBase64(_) | DecoderError::EmptyPayload => {
                "Invalid base64 string"
            }
            DecoderError::UnsupportedContent => "Unable to decode content. Unsupported format.",
        }
    }
}
