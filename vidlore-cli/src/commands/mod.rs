//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod extract;
mod tags;
mod videos;

pub use tags::TagCommands;
pub use videos::VideoCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a YouTube URL and watch the extraction to completion
    Extract {
        /// YouTube video URL
        url: String,
    },
    /// Show the extraction currently in progress
    Status {
        /// Keep following until the extraction finishes
        #[arg(long)]
        watch: bool,
    },
    /// Video library management
    Videos {
        #[command(subcommand)]
        command: VideoCommands,
    },
    /// Tag management
    Tags {
        #[command(subcommand)]
        command: TagCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Extract { url } => extract::handle_extract(config, &url).await,
        Commands::Status { watch } => extract::handle_status(config, watch).await,
        Commands::Videos { command } => videos::handle_video_command(command, config).await,
        Commands::Tags { command } => tags::handle_tag_command(command, config).await,
    }
}
