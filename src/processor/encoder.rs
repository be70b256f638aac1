//! Chunked base64 encoder
//!
//! Reads a source in fixed-size chunks, encodes each chunk and appends it to
//! the output. Chunk sizes are rounded down to a multiple of 3 bytes, so the
//! concatenated output is identical to encoding the whole source at once.
//!
//! Between chunks the task reports progress and pauses briefly so other tasks
//! on the runtime keep running. Cancelling is dropping the future: the open
//! file handle is dropped with it and a retry starts again from byte 0.

use crate::config::{EncoderConfig, DEFAULT_CHUNK_SIZE, DEFAULT_YIELD_INTERVAL_MS};
use crate::shared::base64_helpers;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

/// Result type for encoder operations
pub type EncoderResult<T> = Result<T, EncoderError>;

/// Encoder-specific error types
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    /// The source could not be opened or its size could not be read
    #[error("Cannot read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read failed part way through the source
    #[error("Read failed after {bytes_processed} bytes: {source}")]
    ReadError {
        bytes_processed: u64,
        #[source]
        source: std::io::Error,
    },

    /// Non-empty input produced no output
    #[error("Failed to encode file")]
    EncodingFailed,
}

/// Cumulative progress of one encode operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingProgress {
    pub bytes_processed: u64,
    pub total_bytes: u64,
}

impl EncodingProgress {
    /// Completed fraction in `0.0..=1.0`; an empty source counts as complete
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            1.0
        } else {
            (self.bytes_processed as f64 / self.total_bytes as f64).min(1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.bytes_processed >= self.total_bytes
    }
}

/// Streams a byte source into a base64 string
#[derive(Debug, Clone, Copy)]
pub struct ChunkedEncoder {
    chunk_size: usize,
    yield_interval: Duration,
}

impl Default for ChunkedEncoder {
    fn default() -> Self {
        Self::new(
            DEFAULT_CHUNK_SIZE,
            Duration::from_millis(DEFAULT_YIELD_INTERVAL_MS),
        )
    }
}

impl ChunkedEncoder {
    /// `chunk_size` is rounded down to a multiple of 3 (minimum 3)
    pub fn new(chunk_size: usize, yield_interval: Duration) -> Self {
        Self {
            chunk_size: align_chunk_size(chunk_size),
            yield_interval,
        }
    }

    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::new(config.chunk_size, config.yield_interval())
    }

    /// Effective (aligned) chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn yield_interval(&self) -> Duration {
        self.yield_interval
    }

    /// Encode a file from disk
    pub async fn encode_file<P, F>(&self, path: P, progress: F) -> EncoderResult<String>
    where
        P: AsRef<Path>,
        F: FnMut(EncodingProgress),
    {
        let path = path.as_ref();
        let unreadable = |source| EncoderError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).await.map_err(unreadable)?;
        let metadata = file.metadata().await.map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(unreadable(std::io::Error::new(
                ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let total_bytes = metadata.len();

        info!(
            "Encoding {} ({} bytes, chunk size {})",
            path.display(),
            total_bytes,
            self.chunk_size
        );
        self.encode_reader(file, total_bytes, progress).await
    }

    /// Encode any async reader whose total length is known up front
    pub async fn encode_reader<R, F>(
        &self,
        mut reader: R,
        total_bytes: u64,
        mut progress: F,
    ) -> EncoderResult<String>
    where
        R: AsyncRead + Unpin,
        F: FnMut(EncodingProgress),
    {
        if total_bytes < self.chunk_size as u64 {
            return self.encode_single_pass(reader, total_bytes, progress).await;
        }

        let mut output = String::with_capacity(base64_helpers::encoded_len(total_bytes as usize));
        let mut buffer = vec![0u8; self.chunk_size];
        let mut bytes_processed: u64 = 0;

        loop {
            let filled = fill_chunk(&mut reader, &mut buffer)
                .await
                .map_err(|source| EncoderError::ReadError {
                    bytes_processed,
                    source,
                })?;
            if filled == 0 {
                break;
            }

            base64_helpers::encode_into(&buffer[..filled], &mut output);
            bytes_processed += filled as u64;
            debug!("Encoded chunk: {}/{} bytes", bytes_processed, total_bytes);

            progress(EncodingProgress {
                bytes_processed,
                total_bytes,
            });
            self.checkpoint().await;

            if filled < buffer.len() {
                break;
            }
        }

        if bytes_processed > 0 && output.is_empty() {
            return Err(EncoderError::EncodingFailed);
        }
        Ok(output)
    }

    async fn encode_single_pass<R, F>(
        &self,
        mut reader: R,
        total_bytes: u64,
        mut progress: F,
    ) -> EncoderResult<String>
    where
        R: AsyncRead + Unpin,
        F: FnMut(EncodingProgress),
    {
        let mut data = Vec::with_capacity(total_bytes as usize);
        reader
            .read_to_end(&mut data)
            .await
            .map_err(|source| EncoderError::ReadError {
                bytes_processed: 0,
                source,
            })?;

        let output = base64_helpers::encode(&data);
        if !data.is_empty() && output.is_empty() {
            return Err(EncoderError::EncodingFailed);
        }

        progress(EncodingProgress {
            bytes_processed: data.len() as u64,
            total_bytes,
        });
        Ok(output)
    }

    /// Give the runtime a turn between chunks
    async fn checkpoint(&self) {
        if self.yield_interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.yield_interval).await;
        }
    }
}

fn align_chunk_size(chunk_size: usize) -> usize {
    (chunk_size - chunk_size % 3).max(3)
}

/// Read until the buffer is full or the source is exhausted
async fn fill_chunk<R>(reader: &mut R, buffer: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
