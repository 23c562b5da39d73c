//! Extraction job domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One extraction request as the backend tracks it.
///
/// Created by submitting a YouTube URL, advanced by the backend's pipeline
/// (metadata → transcript → analysis → save), observed by clients through
/// polling. Once `status` is terminal the record never changes again, so a
/// re-fetch of a finished job is idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoJob {
    pub id: Uuid,
    pub youtube_url: String,
    pub youtube_id: String,
    pub status: JobStatus,
    /// Zero-based index into the backend's step list; only meaningful while
    /// the job is active.
    pub current_step: u32,
    pub total_steps: u32,
    pub step_label: String,
    /// Present only when `status` is `Failed`.
    pub error_message: Option<String>,
    /// Present only when `status` is `Completed`; the produced video.
    pub video_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Extraction job status
///
/// Transitions only ever move forward: `Queued → Processing → {Completed |
/// Failed}`, or straight from `Queued` to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether the backend still has work to do on the job.
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::Processing)
    }

    /// Terminal jobs never transition again.
    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }

    /// The lowercase wire spelling, for display.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
