//! Tag domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregated usage of one canonical tag across the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSummary {
    pub tag: String,
    pub usage_count: u32,
    pub last_used_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Alternate spellings folded into this tag, sorted by the backend.
    pub aliases: Vec<String>,
}

/// One alternate spelling mapped to a canonical tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagAlias {
    pub id: Uuid,
    pub alias: String,
    pub canonical: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
