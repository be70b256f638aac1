use crate::cli::input::{load_config, open_recent_files};
use crate::errors::AppResult;
use clap::Args;

/// List recently encoded and exported files
#[derive(Args)]
pub struct RecentCommand {
    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl RecentCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let store = open_recent_files(&config, false)?;
        let files = store.list();

        if self.format.eq_ignore_ascii_case("json") {
            println!("{}", serde_json::to_string_pretty(files)?);
            return Ok(());
        }

        if files.is_empty() {
            println!("No recent files");
            return Ok(());
        }

        println!("\n=== Recent Files ===");
        for file in files {
            println!(
                "{:<40} {:<9} {:>10}  {}",
                file.name,
                file.category.as_str(),
                file.display_size(),
                file.display_date()
            );
        }
        Ok(())
    }
}
