//! Video id resolution
//!
//! Commands accept either a full video UUID or a shortened prefix; prefixes
//! are resolved against the library listing so ids stay typeable.

use anyhow::{Context, Result, anyhow};
use uuid::Uuid;

use vidlore_client::ExtractorClient;

/// A video reference as typed on the command line.
#[derive(Debug, Clone)]
pub enum VideoRef {
    /// Full UUID, usable without a lookup
    Id(Uuid),
    /// Prefix expected to match exactly one library entry
    Prefix(String),
}

impl VideoRef {
    /// Parses command-line input, treating anything that is not a full UUID
    /// as a prefix.
    pub fn parse(input: &str) -> Self {
        match Uuid::parse_str(input) {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Prefix(input.to_lowercase()),
        }
    }

    /// Resolves to a full UUID, fetching the library when a prefix needs
    /// matching.
    ///
    /// # Errors
    /// Fails when no video matches the prefix, when several do, or when the
    /// library listing itself fails.
    pub async fn resolve(&self, client: &ExtractorClient) -> Result<Uuid> {
        let prefix = match self {
            Self::Id(id) => return Ok(*id),
            Self::Prefix(prefix) => prefix,
        };

        let videos = client
            .list_videos()
            .await
            .context("Failed to fetch videos for ID resolution")?;

        let matches: Vec<Uuid> = videos
            .iter()
            .map(|video| video.id)
            .filter(|id| id.to_string().starts_with(prefix.as_str()))
            .collect();

        match matches.as_slice() {
            [] => Err(anyhow!("No video found with ID starting with '{prefix}'")),
            [id] => Ok(*id),
            ids => Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple videos: {}",
                prefix,
                ids.iter()
                    .map(Uuid::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_full_uuids() {
        let id = Uuid::new_v4();
        assert!(matches!(
            VideoRef::parse(&id.to_string()),
            VideoRef::Id(parsed) if parsed == id
        ));
    }

    #[test]
    fn test_parse_lowercases_prefixes() {
        assert!(matches!(
            VideoRef::parse("6F2A"),
            VideoRef::Prefix(prefix) if prefix == "6f2a"
        ));
    }
}
