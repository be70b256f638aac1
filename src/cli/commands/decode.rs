use crate::cli::input::{load_config, open_recent_files, read_input};
use crate::errors::AppResult;
use crate::processor::FileConverter;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Decode base64 or a data URL and save it to a file
#[derive(Args)]
pub struct DecodeCommand {
    /// Base64 text, a data URL, a file containing either, or `-` for stdin
    pub input: String,

    /// File name without extension (default: decoded_<unix seconds>)
    #[arg(long)]
    pub stem: Option<String>,

    /// Output directory (overrides fb64.toml and env vars)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not record the file in the recent-files list
    #[arg(long)]
    pub no_history: bool,
}

impl DecodeCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let input = read_input(&self.input).await?;

        let store = open_recent_files(&config, self.no_history)?;
        let mut converter = FileConverter::new(&config, store);
        if let Some(dir) = &self.output_dir {
            converter = converter.with_output_dir(dir.clone());
        }
        info!("Output directory: {}", converter.output_dir().display());

        let exported = converter.export_decoded(&input, self.stem.as_deref())?;

        println!("Saved: {}", exported.path.display());
        println!(
            "  {} | {} | .{}",
            exported.descriptor.category,
            exported.descriptor.display_size(),
            exported.extension
        );
        Ok(())
    }
}
