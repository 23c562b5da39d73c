//! Video command handlers
//!
//! Handles all video-library CLI commands including listing, viewing the
//! full analysis, saving notes, and deleting entries.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use vidlore_client::ExtractorClient;
use vidlore_core::domain::video::{Video, VideoSummary};

use crate::config::Config;
use crate::id_resolver::VideoRef;

/// Video subcommands
#[derive(Subcommand)]
pub enum VideoCommands {
    /// List extracted videos
    List {
        /// Only show videos whose title, channel or keywords match
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show a video's full analysis and notes
    Show {
        /// Video ID or unambiguous prefix
        id: String,
    },
    /// Save personal notes on a video
    Notes {
        /// Video ID or unambiguous prefix
        id: String,

        /// The notes text
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// Delete a video from the library
    Delete {
        /// Video ID or unambiguous prefix
        id: String,
    },
}

/// Handle video commands
///
/// Routes video subcommands to their respective handlers.
pub async fn handle_video_command(command: VideoCommands, config: &Config) -> Result<()> {
    let client = ExtractorClient::new(config.api_url.as_str());

    match command {
        VideoCommands::List { filter } => list_videos(&client, filter).await,
        VideoCommands::Show { id } => show_video(&client, &id).await,
        VideoCommands::Notes { id, notes } => save_notes(&client, &id, notes).await,
        VideoCommands::Delete { id } => delete_video(&client, &id).await,
    }
}

/// List library entries, newest first
async fn list_videos(client: &ExtractorClient, filter: Option<String>) -> Result<()> {
    let mut videos = client.list_videos().await?;

    if let Some(filter) = &filter {
        let needle = filter.to_lowercase();
        videos.retain(|video| matches_filter(video, &needle));
    }

    if videos.is_empty() {
        println!("{}", "No videos found.".yellow());
    } else {
        println!("{}", format!("Found {} video(s):", videos.len()).bold());
        println!();
        for video in &videos {
            print_video_summary(video);
        }
    }

    Ok(())
}

/// Show one video's full record
async fn show_video(client: &ExtractorClient, id: &str) -> Result<()> {
    let video_id = VideoRef::parse(id).resolve(client).await?;
    let video = client.get_video(video_id).await?;

    print_video_details(&video);

    Ok(())
}

/// Save notes on a video
async fn save_notes(client: &ExtractorClient, id: &str, notes: Vec<String>) -> Result<()> {
    let video_id = VideoRef::parse(id).resolve(client).await?;
    let video = client.update_video_notes(video_id, notes.join(" ")).await?;

    println!(
        "{} Notes saved for {}",
        "✓".green().bold(),
        video.title.as_deref().unwrap_or("(untitled)")
    );

    Ok(())
}

/// Delete a video remotely
async fn delete_video(client: &ExtractorClient, id: &str) -> Result<()> {
    let video_id = VideoRef::parse(id).resolve(client).await?;
    client.delete_video(video_id).await?;

    println!(
        "{} Deleted video {}",
        "✓".green().bold(),
        video_id.to_string().dimmed()
    );

    Ok(())
}

/// Case-insensitive match against title, channel name and keywords
fn matches_filter(video: &VideoSummary, needle: &str) -> bool {
    let title = video.title.as_deref().unwrap_or("");
    let channel = video.channel_name.as_deref().unwrap_or("");
    if title.to_lowercase().contains(needle) || channel.to_lowercase().contains(needle) {
        return true;
    }
    video
        .keywords
        .iter()
        .flatten()
        .any(|keyword| keyword.to_lowercase().contains(needle))
}

/// Print a library entry summary
fn print_video_summary(video: &VideoSummary) {
    println!(
        "  {} {}",
        "▸".cyan(),
        video.title.as_deref().unwrap_or("(untitled)")
    );
    println!("    ID:       {}", video.id.to_string().dimmed());
    if let Some(channel) = &video.channel_name {
        println!("    Channel:  {}", channel);
    }
    if let Some(duration) = video.duration {
        println!("    Duration: {}", format_duration(duration));
    }
    println!(
        "    Added:    {}",
        video
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();
}

/// Print the full record with all analysis sections
fn print_video_details(video: &Video) {
    println!("{}", video.title.as_deref().unwrap_or("(untitled)").bold());
    println!("  ID:         {}", video.id.to_string().cyan());
    println!("  URL:        {}", video.youtube_url);
    if let Some(channel) = &video.channel_name {
        println!("  Channel:    {}", channel);
    }
    if let Some(duration) = video.duration {
        println!("  Duration:   {}", format_duration(duration));
    }
    if let Some(source) = &video.transcript_source {
        println!("  Transcript: {}", source);
    }

    print_section("Explanation", video.explanation.as_deref());
    print_section("Key knowledge", video.key_knowledge.as_deref());
    print_section("Critical analysis", video.critical_analysis.as_deref());
    print_section(
        "Real-world applications",
        video.real_world_applications.as_deref(),
    );

    if let Some(keywords) = &video.keywords
        && !keywords.is_empty()
    {
        println!("\n{}", "Keywords:".bold());
        println!("  {}", keywords.join(", ").cyan());
    }

    print_section("Notes", video.notes.as_deref());
}

fn print_section(heading: &str, body: Option<&str>) {
    if let Some(body) = body {
        println!("\n{}", format!("{heading}:").bold());
        println!("{}", body);
    }
}

/// Render seconds as m:ss or h:mm:ss
fn format_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    if minutes >= 60 {
        format!("{}:{:02}:{:02}", minutes / 60, minutes % 60, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn summary(title: Option<&str>, channel: Option<&str>, keywords: Option<Vec<&str>>) -> VideoSummary {
        VideoSummary {
            id: Uuid::new_v4(),
            youtube_url: "https://youtu.be/abc123".to_string(),
            youtube_id: "abc123".to_string(),
            title: title.map(str::to_string),
            thumbnail_url: None,
            channel_name: channel.map(str::to_string),
            duration: None,
            explanation: None,
            key_knowledge: None,
            keywords: keywords.map(|k| k.into_iter().map(str::to_string).collect()),
            transcript_source: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_matches_title_channel_and_keywords() {
        let video = summary(
            Some("Ownership in Rust"),
            Some("rustconf"),
            Some(vec!["borrow checker", "lifetimes"]),
        );

        assert!(matches_filter(&video, "ownership"));
        assert!(matches_filter(&video, "rustconf"));
        assert!(matches_filter(&video, "borrow"));
        assert!(!matches_filter(&video, "python"));
    }

    #[test]
    fn test_filter_tolerates_missing_fields() {
        let video = summary(None, None, None);
        assert!(!matches_filter(&video, "anything"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(3723), "1:02:03");
    }
}
