//! Extraction lifecycle controller
//!
//! Owns the one extraction a session can track: submits the job, persists
//! its id for crash recovery, pumps poll events into state, and keeps the
//! video library cache in sync. Failures never propagate out of the
//! controller; they surface as user-facing message slots instead.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use vidlore_client::ExtractorClient;
use vidlore_core::domain::job::{JobStatus, VideoJob};
use vidlore_core::domain::video::VideoSummary;

use crate::library::VideoLibrary;
use crate::poller::{JobPoller, PollEvent};
use crate::store::JobStore;

const MSG_ALREADY_IN_LIBRARY: &str = "This video is already in your library.";
const MSG_EXTRACT_FAILED: &str = "Failed to extract video";
const MSG_REFRESH_FAILED: &str = "Failed to refresh extraction status";
const MSG_LOAD_STATUS_FAILED: &str = "Failed to load extraction status";
const MSG_LOAD_VIDEOS_FAILED: &str = "Failed to load videos";

/// Snapshot of the currently-active extraction, shaped for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub job_id: Uuid,
    pub url: String,
    /// Zero-based step index as the backend reports it; shown as `step + 1`.
    pub step: u32,
    pub total_steps: u32,
    pub step_label: String,
}

impl Extraction {
    fn from_job(job: &VideoJob) -> Self {
        Self {
            job_id: job.id,
            url: job.youtube_url.clone(),
            step: job.current_step,
            total_steps: job.total_steps,
            step_label: job.step_label.clone(),
        }
    }
}

/// Drives the extraction lifecycle: submit, resume, poll, reconcile.
///
/// Holds a single logical slot, either idle or tracking one active job.
/// Whether to allow submitting while a job is active is the caller's
/// decision; a second `extract` replaces the tracked job.
pub struct ExtractionController {
    client: Arc<ExtractorClient>,
    poller: JobPoller,
    events: mpsc::UnboundedReceiver<PollEvent>,
    store: Box<dyn JobStore>,
    library: VideoLibrary,
    active: Option<VideoJob>,
    error: Option<String>,
    info: Option<String>,
}

impl ExtractionController {
    /// Creates an idle controller.
    pub fn new(
        client: Arc<ExtractorClient>,
        store: Box<dyn JobStore>,
        poll_interval: Duration,
    ) -> Self {
        let (poller, events) = JobPoller::new(Arc::clone(&client), poll_interval);
        let library = VideoLibrary::new(Arc::clone(&client));
        Self {
            client,
            poller,
            events,
            store,
            library,
            active: None,
            error: None,
            info: None,
        }
    }

    /// Submits `url` for extraction and starts watching the job.
    ///
    /// The backend resolves a URL that was extracted before by answering
    /// with the already-finished job; in that case nothing is polled and
    /// the info message says the video is already in the library.
    pub async fn extract(&mut self, url: &str) {
        self.error = None;
        self.info = None;

        let job = match self.client.create_video_job(url).await {
            Ok(job) => job,
            Err(e) => {
                warn!("Create video job failed: {}", e);
                self.error = Some(e.to_string());
                return;
            }
        };

        match job.status {
            JobStatus::Completed => {
                debug!("Job {} already complete, nothing to poll", job.id);
                self.clear_store();
                self.info = Some(MSG_ALREADY_IN_LIBRARY.to_string());
                self.refresh_library().await;
            }
            JobStatus::Failed => {
                self.clear_store();
                self.error = Some(
                    job.error_message
                        .unwrap_or_else(|| MSG_EXTRACT_FAILED.to_string()),
                );
            }
            _ => {
                self.persist(job.id);
                let job_id = job.id;
                self.active = Some(job);
                self.poller.start(job_id).await;
            }
        }
    }

    /// Waits for the next poll event and folds it into controller state.
    ///
    /// Returns the fetched job snapshot, or `None` once the controller is
    /// idle or the polling session died. Events stamped by a stopped
    /// session are discarded, never applied.
    pub async fn next_update(&mut self) -> Option<VideoJob> {
        while self.is_extracting() {
            let event = self.events.recv().await?;
            if event.session() != self.poller.session() {
                debug!("Discarding event from stopped session {}", event.session());
                continue;
            }
            match event {
                PollEvent::Update { job, .. } => {
                    self.apply_update(&job).await;
                    return Some(job);
                }
                PollEvent::Failed { .. } => {
                    self.poller.stop();
                    self.clear_store();
                    self.active = None;
                    self.error = Some(MSG_REFRESH_FAILED.to_string());
                    return None;
                }
            }
        }
        None
    }

    /// Restores state from a previous session, in order: refresh the
    /// library, resume the persisted job if it is still active, otherwise
    /// scan the backend for a queued or processing job a crashed session
    /// left behind. Every failure is non-fatal to startup.
    pub async fn bootstrap(&mut self) {
        self.refresh_library().await;

        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Job store read failed: {}", e);
                None
            }
        };

        if let Some(job_id) = stored {
            match self.client.get_video_job(job_id).await {
                Ok(job) if job.status.is_active() => {
                    debug!("Resuming persisted job {}", job_id);
                    self.resume(job).await;
                    return;
                }
                Ok(_) => {
                    debug!("Persisted job {} already finished, dropping it", job_id);
                    self.clear_store();
                }
                Err(e) => {
                    warn!("Persisted job {} could not be fetched: {}", job_id, e);
                    self.clear_store();
                }
            }
        }

        // A crashed session may have left a job running without persisting it.
        match self
            .client
            .list_video_jobs(&[JobStatus::Queued, JobStatus::Processing])
            .await
        {
            Ok(jobs) => {
                if let Some(job) = jobs.into_iter().next()
                    && job.status.is_active()
                {
                    debug!("Resuming job {} found by backend scan", job.id);
                    self.resume(job).await;
                }
            }
            Err(e) => {
                warn!("Active job scan failed: {}", e);
                self.error = Some(MSG_LOAD_STATUS_FAILED.to_string());
            }
        }
    }

    /// View of the active extraction, or `None` when idle.
    pub fn extraction(&self) -> Option<Extraction> {
        self.active.as_ref().map(Extraction::from_job)
    }

    /// Whether an extraction is currently being tracked.
    pub fn is_extracting(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|job| job.status.is_active())
    }

    /// The cached video library, newest first.
    pub fn videos(&self) -> &[VideoSummary] {
        self.library.videos()
    }

    /// Current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current info message, if any.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Drops both message slots.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.info = None;
    }

    /// Optimistically drops a video from the cached library. The remote
    /// delete itself is the caller's call.
    pub fn remove_video(&mut self, video_id: Uuid) {
        self.library.remove(video_id);
    }

    /// Re-fetches the video library, keeping the old list on failure.
    pub async fn refresh_videos(&mut self) {
        self.refresh_library().await;
    }

    async fn apply_update(&mut self, job: &VideoJob) {
        match job.status {
            JobStatus::Completed => {
                debug!("Job {} completed", job.id);
                self.poller.stop();
                self.clear_store();
                self.active = None;
                self.refresh_library().await;
            }
            JobStatus::Failed => {
                debug!("Job {} failed", job.id);
                self.poller.stop();
                self.clear_store();
                self.active = None;
                self.error = Some(
                    job.error_message
                        .clone()
                        .unwrap_or_else(|| MSG_EXTRACT_FAILED.to_string()),
                );
            }
            _ => {
                self.active = Some(job.clone());
            }
        }
    }

    async fn resume(&mut self, job: VideoJob) {
        self.persist(job.id);
        let job_id = job.id;
        self.active = Some(job);
        self.poller.start(job_id).await;
    }

    async fn refresh_library(&mut self) {
        if self.library.refresh().await.is_err() {
            self.error = Some(MSG_LOAD_VIDEOS_FAILED.to_string());
        }
    }

    fn persist(&mut self, job_id: Uuid) {
        if let Err(e) = self.store.save(job_id) {
            warn!("Could not persist active job id: {}", e);
        }
    }

    fn clear_store(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Could not clear persisted job id: {}", e);
        }
    }
}
