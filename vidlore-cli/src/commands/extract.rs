//! Extraction command handlers
//!
//! Handles submitting a video for extraction and following the progress
//! of the job the backend runs for it, including picking up a job a
//! previous session left running.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use vidlore_client::ExtractorClient;
use vidlore_core::domain::job::JobStatus;
use vidlore_extraction::{Extraction, ExtractionController, FileJobStore};

use crate::config::Config;

/// Submit a URL and watch the extraction until it finishes
pub async fn handle_extract(config: &Config, url: &str) -> Result<()> {
    let mut controller = build_controller(config);

    controller.bootstrap().await;
    print_startup_warnings(&mut controller);

    if let Some(active) = controller.extraction() {
        bail!(
            "an extraction is already in progress for {} (follow it with `vidlore status --watch`)",
            active.url
        );
    }

    controller.extract(url).await;

    if let Some(info) = controller.info() {
        println!("{}", info.yellow());
        return Ok(());
    }
    if let Some(message) = controller.error() {
        bail!("{message}");
    }

    println!("{} {}", "Extracting".cyan().bold(), url);
    watch_to_completion(&mut controller).await
}

/// Show the current extraction, optionally following it to the end
pub async fn handle_status(config: &Config, watch: bool) -> Result<()> {
    let mut controller = build_controller(config);

    controller.bootstrap().await;
    print_startup_warnings(&mut controller);

    let Some(view) = controller.extraction() else {
        println!("{}", "No extraction in progress.".yellow());
        return Ok(());
    };

    println!("{} {}", "Extracting".cyan().bold(), view.url);
    println!("  {}", progress_line(&view));

    if watch {
        watch_to_completion(&mut controller).await
    } else {
        Ok(())
    }
}

/// Wire a controller to the configured backend and state file
fn build_controller(config: &Config) -> ExtractionController {
    let client = Arc::new(ExtractorClient::new(config.api_url.as_str()));
    let state_file = config
        .state_file
        .clone()
        .unwrap_or_else(FileJobStore::default_path);
    let store = FileJobStore::new(state_file);
    ExtractionController::new(client, Box::new(store), config.poll_interval)
}

/// Bootstrap failures are non-fatal; surface them without aborting.
fn print_startup_warnings(controller: &mut ExtractionController) {
    if let Some(message) = controller.error() {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
    controller.clear_messages();
}

/// Follow poll updates on a spinner until the job reaches a terminal state
async fn watch_to_completion(controller: &mut ExtractionController) -> Result<()> {
    let initial = controller
        .extraction()
        .map(|view| progress_line(&view))
        .unwrap_or_else(|| "Waiting for extraction status...".to_string());
    let spinner = create_spinner(&initial)?;

    let mut last = None;
    while let Some(job) = controller.next_update().await {
        if let Some(view) = controller.extraction() {
            spinner.set_message(progress_line(&view));
        }
        last = Some(job);
    }
    spinner.finish_and_clear();

    if let Some(message) = controller.error() {
        bail!("{message}");
    }

    if let Some(job) = last
        && job.status == JobStatus::Completed
    {
        println!("{} Extraction complete", "✓".green().bold());
        if let Some(video_id) = job.video_id {
            match controller.videos().iter().find(|video| video.id == video_id) {
                Some(video) => println!(
                    "  {} {}",
                    video.id.to_string().dimmed(),
                    video.title.as_deref().unwrap_or("(untitled)")
                ),
                None => println!("  {}", video_id.to_string().dimmed()),
            }
        }
    }

    Ok(())
}

fn progress_line(view: &Extraction) -> String {
    format!(
        "Step {}/{}: {}",
        view.step + 1,
        view.total_steps,
        view.step_label
    )
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}
