//! Video domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// List-view projection of a stored video.
///
/// The backend leaves the heavy analysis text out of list responses; the full
/// record is [`Video`]. Every content field is nullable because extraction can
/// partially fail while still producing an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: Uuid,
    pub youtube_url: String,
    pub youtube_id: String,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub channel_name: Option<String>,
    /// Runtime in seconds.
    pub duration: Option<u32>,
    pub explanation: Option<String>,
    pub key_knowledge: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Where the transcript came from: "captions" or "whisper".
    pub transcript_source: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Full video record with all analysis fields and personal notes.
///
/// Immutable from the client's point of view except `notes`, which is saved
/// on demand through a dedicated endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub youtube_url: String,
    pub youtube_id: String,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub channel_name: Option<String>,
    pub duration: Option<u32>,
    pub explanation: Option<String>,
    pub key_knowledge: Option<String>,
    pub critical_analysis: Option<String>,
    pub real_world_applications: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub notes: Option<String>,
    pub transcript_source: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
