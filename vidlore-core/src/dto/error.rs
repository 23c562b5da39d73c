//! Backend error body

use serde::{Deserialize, Serialize};

/// Body the backend attaches to non-2xx responses: `{"detail": "..."}`.
///
/// `detail` is human-readable and often names the specific cause ("Invalid
/// YouTube URL", "Video not found"), so clients surface it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
