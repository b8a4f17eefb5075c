use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;
mod ui;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("event-hub.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    // Load .env file if it exists (EVENT_HUB_COLLECTOR_URL)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    info!("Starting event-hub");

    cli::run(cli).await
}
