use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod input;

/// fb64 - base64 file converter
#[derive(Parser)]
#[command(name = "fb64")]
#[command(about = "Encode files to base64 and decode base64 / data URLs back to files")]
#[command(version)]
pub struct Cli {
    /// Log progress details (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Encode a file to base64
    Encode(commands::encode::EncodeCommand),
    /// Decode base64 or a data URL and save it to a file
    Decode(commands::decode::DecodeCommand),
    /// Classify base64 or a data URL without saving it
    Inspect(commands::inspect::InspectCommand),
    /// List recently encoded and exported files
    Recent(commands::recent::RecentCommand),
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Uses RUST_LOG environment variable (defaults to "error", or "info" with --verbose)
    let default_filter = if cli.verbose { "info" } else { "error" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();

    match cli.command {
        Commands::Encode(command) => command.run().await,
        Commands::Decode(command) => command.run().await,
        Commands::Inspect(command) => command.run().await,
        Commands::Recent(command) => command.run(),
    }
}
