//! Extraction job request bodies

use serde::{Deserialize, Serialize};

/// Request to start extracting a YouTube video.
///
/// The backend answers with a [`VideoJob`](crate::domain::job::VideoJob) in
/// whatever state it could reach immediately: freshly queued, or already
/// completed when the URL's video is in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideoJob {
    pub youtube_url: String,
}
