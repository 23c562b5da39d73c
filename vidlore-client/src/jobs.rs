//! Extraction job endpoints

use crate::ExtractorClient;
use crate::error::Result;
use uuid::Uuid;
use vidlore_core::domain::job::{JobStatus, VideoJob};
use vidlore_core::dto::job::CreateVideoJob;

impl ExtractorClient {
    // =============================================================================
    // Extraction Job Lifecycle
    // =============================================================================

    /// Submit a YouTube URL for extraction.
    ///
    /// The returned job may already be terminal: the backend answers with a
    /// `completed` job when the URL's video is already in the library, and a
    /// `failed` one when it rejects the URL outright.
    ///
    /// # Example
    /// ```no_run
    /// # use vidlore_client::ExtractorClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ExtractorClient::new("http://localhost:8000");
    /// let job = client.create_video_job("https://youtu.be/abc123").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_video_job(&self, youtube_url: impl Into<String>) -> Result<VideoJob> {
        let url = format!("{}/api/videos", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateVideoJob {
                youtube_url: youtube_url.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an extraction job by ID
    ///
    /// # Arguments
    /// * `job_id` - The job UUID
    ///
    /// # Returns
    /// The job's current state
    pub async fn get_video_job(&self, job_id: Uuid) -> Result<VideoJob> {
        let url = format!("{}/api/videos/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List extraction jobs, optionally filtered by status.
    ///
    /// An empty filter lists every job. Jobs come back newest first.
    ///
    /// # Arguments
    /// * `statuses` - Statuses to include, sent as a comma-separated filter
    pub async fn list_video_jobs(&self, statuses: &[JobStatus]) -> Result<Vec<VideoJob>> {
        let url = format!("{}/api/videos/jobs", self.base_url);
        let mut request = self.client.get(&url);

        if !statuses.is_empty() {
            let filter = statuses
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(",");
            request = request.query(&[("status", filter)]);
        }

        let response = request.send().await?;

        self.handle_response(response).await
    }
}
