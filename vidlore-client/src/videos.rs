//! Video endpoints

use crate::ExtractorClient;
use crate::error::Result;
use uuid::Uuid;
use vidlore_core::domain::video::{Video, VideoSummary};
use vidlore_core::dto::video::UpdateVideoNotes;

impl ExtractorClient {
    // =============================================================================
    // Video Library
    // =============================================================================

    /// List all videos in the library, newest first.
    ///
    /// List entries carry the summary fields only; fetch a single video for
    /// the full analysis text and notes.
    pub async fn list_videos(&self) -> Result<Vec<VideoSummary>> {
        let url = format!("{}/api/videos", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a single video with its full analysis and notes
    ///
    /// # Arguments
    /// * `video_id` - The video UUID
    pub async fn get_video(&self, video_id: Uuid) -> Result<Video> {
        let url = format!("{}/api/videos/{}", self.base_url, video_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Replace the personal notes on a video.
    ///
    /// # Arguments
    /// * `video_id` - The video UUID
    /// * `notes` - The new notes text
    ///
    /// # Returns
    /// The updated video
    pub async fn update_video_notes(
        &self,
        video_id: Uuid,
        notes: impl Into<String>,
    ) -> Result<Video> {
        let url = format!("{}/api/videos/{}", self.base_url, video_id);
        let response = self
            .client
            .patch(&url)
            .json(&UpdateVideoNotes {
                notes: notes.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a video entry.
    ///
    /// # Arguments
    /// * `video_id` - The video UUID to delete
    pub async fn delete_video(&self, video_id: Uuid) -> Result<()> {
        let url = format!("{}/api/videos/{}", self.base_url, video_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
