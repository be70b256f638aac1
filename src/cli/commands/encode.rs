use crate::cli::input::{load_config, open_recent_files};
use crate::errors::{AppError, AppResult};
use crate::processor::{ChunkedEncoder, FileConverter, ProgressReporter, StandardProgressTracker};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Encode a file to base64
#[derive(Args)]
pub struct EncodeCommand {
    /// File to encode
    pub file: PathBuf,

    /// Write the encoded text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bytes read per chunk (overrides fb64.toml; rounded down to a multiple of 3)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Do not record the file in the recent-files list
    #[arg(long)]
    pub no_history: bool,

    /// Suppress the progress line on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl EncodeCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config()?;

        let chunk_size = self.chunk_size.unwrap_or(config.encoder.chunk_size);
        if chunk_size == 0 {
            return Err(AppError::InvalidInput(
                "--chunk-size must be greater than 0".to_string(),
            ));
        }
        let encoder = ChunkedEncoder::new(chunk_size, config.encoder.yield_interval());

        info!("Configuration:");
        info!("  File: {}", self.file.display());
        info!("  Chunk size: {}", encoder.chunk_size());
        info!("  Yield interval: {:?}", encoder.yield_interval());

        let store = open_recent_files(&config, self.no_history)?;
        let mut converter = FileConverter::new(&config, store).with_encoder(encoder);

        let mut tracker = StandardProgressTracker::new();
        tracker.start();
        let mut total_bytes = 0;
        let mut printed_progress = false;

        let encoded = converter
            .encode_file(&self.file, |progress| {
                total_bytes = progress.total_bytes;
                if self.quiet || !tracker.should_report(&progress) {
                    return;
                }
                let line = ProgressReporter::format_encoding_progress(
                    &progress,
                    tracker.elapsed_seconds(),
                );
                if ProgressReporter::print_progress_line(&line).is_ok() {
                    printed_progress = true;
                }
            })
            .await?;

        if printed_progress {
            ProgressReporter::finish_progress_line();
        }
        ProgressReporter::report_completion(
            "Encoding",
            total_bytes,
            encoded.len(),
            tracker.elapsed_seconds(),
        );

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &encoded)?;
                eprintln!("Base64 written to: {}", path.display());
            }
            None => println!("{}", encoded),
        }

        Ok(())
    }
}
