//! Tag command handlers
//!
//! Handles tag curation: listing usage, aliasing alternate spellings to a
//! canonical tag, renaming, merging, and deleting.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use vidlore_client::ExtractorClient;
use vidlore_core::domain::tag::{TagAlias, TagSummary};

use crate::config::Config;

/// Tag subcommands
#[derive(Subcommand)]
pub enum TagCommands {
    /// List all tags with usage counts
    List,
    /// List alias mappings
    Aliases,
    /// Map an alternate spelling onto a canonical tag
    Alias {
        /// The alternate spelling
        alias: String,
        /// The canonical tag it stands for
        canonical: String,
    },
    /// Remove an alias mapping
    Unalias {
        /// The alias to remove
        alias: String,
    },
    /// Rename a tag everywhere it is used
    Rename {
        /// Current tag name
        from: String,
        /// New tag name
        to: String,
    },
    /// Merge several tags into one
    Merge {
        /// Tags to fold into the target
        #[arg(required = true)]
        sources: Vec<String>,

        /// Tag that absorbs the sources
        #[arg(long)]
        into: String,
    },
    /// Delete a tag everywhere it is used
    Delete {
        /// The tag to delete
        tag: String,
    },
}

/// Handle tag commands
///
/// Routes tag subcommands to their respective handlers.
pub async fn handle_tag_command(command: TagCommands, config: &Config) -> Result<()> {
    let client = ExtractorClient::new(config.api_url.as_str());

    match command {
        TagCommands::List => list_tags(&client).await,
        TagCommands::Aliases => list_aliases(&client).await,
        TagCommands::Alias { alias, canonical } => create_alias(&client, alias, canonical).await,
        TagCommands::Unalias { alias } => remove_alias(&client, &alias).await,
        TagCommands::Rename { from, to } => rename_tag(&client, from, to).await,
        TagCommands::Merge { sources, into } => merge_tags(&client, sources, into).await,
        TagCommands::Delete { tag } => delete_tag(&client, &tag).await,
    }
}

/// List all tags
async fn list_tags(client: &ExtractorClient) -> Result<()> {
    let tags = client.list_tags().await?;
    print_tag_summaries(&tags);
    Ok(())
}

/// List all alias mappings
async fn list_aliases(client: &ExtractorClient) -> Result<()> {
    let aliases = client.list_tag_aliases().await?;

    if aliases.is_empty() {
        println!("{}", "No aliases found.".yellow());
    } else {
        println!("{}", format!("Found {} alias(es):", aliases.len()).bold());
        println!();
        for alias in &aliases {
            print_tag_alias(alias);
        }
    }

    Ok(())
}

/// Create an alias mapping
async fn create_alias(client: &ExtractorClient, alias: String, canonical: String) -> Result<()> {
    let created = client.create_tag_alias(alias, canonical).await?;

    println!(
        "{} Alias {} now stands for {}",
        "✓".green().bold(),
        created.alias.cyan(),
        created.canonical.cyan()
    );

    Ok(())
}

/// Remove an alias mapping
async fn remove_alias(client: &ExtractorClient, alias: &str) -> Result<()> {
    client.delete_tag_alias(alias).await?;

    println!("{} Removed alias {}", "✓".green().bold(), alias.cyan());

    Ok(())
}

/// Rename a tag and show the updated tag list
async fn rename_tag(client: &ExtractorClient, from: String, to: String) -> Result<()> {
    let renamed_from = from.clone();
    let renamed_to = to.clone();
    let tags = client.rename_tag(from, to).await?;

    println!(
        "{} Renamed {} to {}",
        "✓".green().bold(),
        renamed_from.cyan(),
        renamed_to.cyan()
    );
    println!();
    print_tag_summaries(&tags);

    Ok(())
}

/// Merge tags and show the updated tag list
async fn merge_tags(client: &ExtractorClient, sources: Vec<String>, into: String) -> Result<()> {
    let merged = sources.join(", ");
    let target = into.clone();
    let tags = client.merge_tags(sources, into).await?;

    println!(
        "{} Merged {} into {}",
        "✓".green().bold(),
        merged.cyan(),
        target.cyan()
    );
    println!();
    print_tag_summaries(&tags);

    Ok(())
}

/// Delete a tag and show the updated tag list
async fn delete_tag(client: &ExtractorClient, tag: &str) -> Result<()> {
    let tags = client.delete_tag(tag).await?;

    println!("{} Deleted tag {}", "✓".green().bold(), tag.cyan());
    println!();
    print_tag_summaries(&tags);

    Ok(())
}

/// Print tag summaries with usage information
fn print_tag_summaries(tags: &[TagSummary]) {
    if tags.is_empty() {
        println!("{}", "No tags found.".yellow());
        return;
    }

    println!("{}", format!("Found {} tag(s):", tags.len()).bold());
    println!();
    for tag in tags {
        println!("  {} {}", "▸".cyan(), tag.tag.bold());
        println!("    Used:      {} time(s)", tag.usage_count);
        if let Some(last_used) = tag.last_used_at {
            println!(
                "    Last used: {}",
                last_used.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            );
        }
        if !tag.aliases.is_empty() {
            println!("    Aliases:   {}", tag.aliases.join(", ").dimmed());
        }
        println!();
    }
}

/// Print one alias mapping
fn print_tag_alias(alias: &TagAlias) {
    println!(
        "  {} {} stands for {}",
        "▸".cyan(),
        alias.alias,
        alias.canonical.bold()
    );
}
