//! Tag management request bodies

use serde::{Deserialize, Serialize};

/// Request to map an alternate spelling onto a canonical tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagAlias {
    pub alias: String,
    pub canonical: String,
}

/// Request to rename a tag everywhere it is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameTag {
    pub from_tag: String,
    pub to_tag: String,
}

/// Request to fold several tags into one target tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeTags {
    pub source_tags: Vec<String>,
    pub target_tag: String,
}
