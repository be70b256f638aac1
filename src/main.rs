#[tokio::main]
async fn main() {
    if let Err(e) = fb64::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
