//! Video request bodies

use serde::{Deserialize, Serialize};

/// Request to replace the personal notes on a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVideoNotes {
    pub notes: String,
}
