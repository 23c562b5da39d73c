//! vidlore CLI
//!
//! Command-line interface for the YouTube knowledge extractor backend.

mod commands;
mod config;
mod id_resolver;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidlore_extraction::DEFAULT_POLL_INTERVAL;

use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "vidlore")]
#[command(about = "Turn YouTube videos into a searchable knowledge base", long_about = None)]
struct Cli {
    /// Extractor backend URL
    #[arg(long, env = "VIDLORE_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Delay between extraction status fetches, in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    poll_interval: u64,

    /// File that keeps the active job id between sessions
    #[arg(long)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vidlore_cli=warn,vidlore_extraction=warn,vidlore_client=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        poll_interval: Duration::from_millis(cli.poll_interval),
        state_file: cli.state_file,
    };

    if let Err(e) = handle_command(cli.command, &config).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
