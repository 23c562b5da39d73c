//! Cached view of the extracted-video library

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use vidlore_client::{ClientError, ExtractorClient};
use vidlore_core::domain::video::VideoSummary;

/// Process-lifetime cache of the backend's video list.
///
/// The backend is the source of truth and already sorts newest first, so a
/// refresh is a full replace and entries keep the order they arrived in.
pub struct VideoLibrary {
    client: Arc<ExtractorClient>,
    videos: Vec<VideoSummary>,
}

impl VideoLibrary {
    /// Creates an empty library.
    pub fn new(client: Arc<ExtractorClient>) -> Self {
        Self {
            client,
            videos: Vec::new(),
        }
    }

    /// Replaces the cached list with a fresh fetch.
    ///
    /// On failure the previous list stays untouched.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.list_videos().await {
            Ok(videos) => {
                debug!("Video library refreshed ({} entries)", videos.len());
                self.videos = videos;
                Ok(())
            }
            Err(e) => {
                warn!("Video list refresh failed: {}", e);
                Err(e)
            }
        }
    }

    /// The cached entries, in backend order.
    pub fn videos(&self) -> &[VideoSummary] {
        &self.videos
    }

    /// Drops the entry with `video_id`, leaving the rest and their order
    /// untouched. Meant for optimistic updates after a remote delete.
    pub fn remove(&mut self, video_id: Uuid) {
        self.videos.retain(|video| video.id != video_id);
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
