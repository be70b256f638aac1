//! Converter service: encode files and export decoded payloads
//!
//! Every successful encode or export is recorded in the injected
//! `RecentFilesStore`.

use crate::config::AppConfig;
use crate::database::RecentFilesStore;
use crate::decoder::{ContentDecoder, DecoderError, OutputManager};
use crate::detection::resolve_extension;
use crate::errors::{AppError, AppResult};
use crate::processor::{ChunkedEncoder, EncodingProgress};
use crate::types::content_detection::ContentSniffer;
use crate::types::FileDescriptor;
use crate::utils::time::decoded_file_stem;
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of writing a decoded payload to disk
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub descriptor: FileDescriptor,
    pub path: PathBuf,
    pub extension: String,
}

pub struct FileConverter<S: RecentFilesStore> {
    encoder: ChunkedEncoder,
    decoder: ContentDecoder,
    output: OutputManager,
    store: S,
}

impl<S: RecentFilesStore> FileConverter<S> {
    pub fn new(config: &AppConfig, store: S) -> Self {
        Self {
            encoder: ChunkedEncoder::from_config(&config.encoder),
            decoder: ContentDecoder::new(ContentSniffer::with_pdf_detection(
                config.sniffer.detect_pdf,
            )),
            output: OutputManager::new(config.export.output_dir.clone()),
            store,
        }
    }

    /// Replace the encoder, e.g. for a command-line chunk size override
    pub fn with_encoder(mut self, encoder: ChunkedEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Write exports somewhere other than the configured directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output = OutputManager::new(output_dir);
        self
    }

    pub fn encoder(&self) -> &ChunkedEncoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &ContentDecoder {
        &self.decoder
    }

    pub fn output_dir(&self) -> &Path {
        self.output.base_dir()
    }

    pub fn recent_files(&self) -> &[FileDescriptor] {
        self.store.list()
    }

    /// Encode a file and record it in the recent-files list
    pub async fn encode_file<P, F>(&mut self, path: P, mut progress: F) -> AppResult<String>
    where
        P: AsRef<Path>,
        F: FnMut(EncodingProgress),
    {
        let path = path.as_ref();
        let mut total_bytes = 0;
        let encoded = self
            .encoder
            .encode_file(path, |update| {
                total_bytes = update.total_bytes;
                progress(update);
            })
            .await?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.store
            .add(FileDescriptor::new(name, total_bytes as i64))?;

        info!(
            "Encoded {} ({} bytes -> {} chars)",
            path.display(),
            total_bytes,
            encoded.len()
        );
        Ok(encoded)
    }

    /// Decode pasted input and write it to `<output_dir>/<stem>.<ext>`
    ///
    /// The extension comes from the declared data-URL MIME type, then from
    /// the bytes themselves. The stem defaults to `decoded_<unix seconds>`.
    /// Unclassifiable content is still written; only empty or invalid
    /// base64 is rejected.
    pub fn export_decoded(&mut self, input: &str, file_stem: Option<&str>) -> AppResult<ExportedFile> {
        let raw = self
            .decoder
            .decode_bytes(input)?
            .ok_or(AppError::Decoder(DecoderError::EmptyPayload))?;

        let extension = resolve_extension(raw.declared_mime.as_deref(), Some(raw.bytes.as_slice()));
        let stem = match file_stem {
            Some(stem) => stem.to_string(),
            None => decoded_file_stem(&Utc::now()),
        };

        if self.output.file_exists(&stem, &extension) {
            warn!("Overwriting existing {}.{}", stem, extension);
        }
        let path = self
            .output
            .write_decoded(&stem, &extension, raw.bytes.as_slice())?;

        let descriptor = FileDescriptor::new(format!("{}.{}", stem, extension), raw.bytes.len() as i64);
        self.store.add(descriptor.clone())?;

        info!("Exported {} ({})", path.display(), descriptor.display_size());
        Ok(ExportedFile {
            descriptor,
            path,
            extension,
        })
    }
}
