//! Tag management endpoints
//!
//! Tag names are user text and may contain spaces or punctuation, so any tag
//! that travels in a path segment is percent-encoded.

use crate::ExtractorClient;
use crate::error::Result;
use vidlore_core::domain::tag::{TagAlias, TagSummary};
use vidlore_core::dto::tag::{CreateTagAlias, MergeTags, RenameTag};

impl ExtractorClient {
    // =============================================================================
    // Tag Summaries
    // =============================================================================

    /// List every tag in use with its usage count and aliases
    pub async fn list_tags(&self) -> Result<Vec<TagSummary>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Rename a tag everywhere it is used.
    ///
    /// The backend rewrites video keywords and records the old spelling as an
    /// alias of the new one.
    ///
    /// # Returns
    /// The refreshed tag summaries
    pub async fn rename_tag(
        &self,
        from_tag: impl Into<String>,
        to_tag: impl Into<String>,
    ) -> Result<Vec<TagSummary>> {
        let url = format!("{}/api/tags/rename", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RenameTag {
                from_tag: from_tag.into(),
                to_tag: to_tag.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fold several tags into one target tag.
    ///
    /// # Arguments
    /// * `source_tags` - Tags to fold away
    /// * `target_tag` - The tag they all become
    ///
    /// # Returns
    /// The refreshed tag summaries
    pub async fn merge_tags(
        &self,
        source_tags: Vec<String>,
        target_tag: impl Into<String>,
    ) -> Result<Vec<TagSummary>> {
        let url = format!("{}/api/tags/merge", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&MergeTags {
                source_tags,
                target_tag: target_tag.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Remove a tag from every video that carries it
    ///
    /// # Returns
    /// The refreshed tag summaries
    pub async fn delete_tag(&self, tag: &str) -> Result<Vec<TagSummary>> {
        let url = format!("{}/api/tags/{}", self.base_url, urlencoding::encode(tag));
        let response = self.client.delete(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Tag Aliases
    // =============================================================================

    /// List all alias → canonical mappings
    pub async fn list_tag_aliases(&self) -> Result<Vec<TagAlias>> {
        let url = format!("{}/api/tags/aliases", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Map an alternate spelling onto a canonical tag.
    ///
    /// Re-posting an existing alias repoints it at the new canonical tag.
    pub async fn create_tag_alias(
        &self,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Result<TagAlias> {
        let url = format!("{}/api/tags/aliases", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateTagAlias {
                alias: alias.into(),
                canonical: canonical.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Drop an alias mapping
    ///
    /// # Arguments
    /// * `alias` - The alias spelling to drop
    pub async fn delete_tag_alias(&self, alias: &str) -> Result<()> {
        let url = format!(
            "{}/api/tags/aliases/{}",
            self.base_url,
            urlencoding::encode(alias)
        );
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
