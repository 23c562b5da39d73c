//! Extraction job poller
//!
//! Watches a single extraction job by fetching its status on a fixed
//! interval and streaming each snapshot over an event channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, warn};
use uuid::Uuid;

use vidlore_client::ExtractorClient;
use vidlore_core::domain::job::VideoJob;

/// Delay between two status fetches unless configured otherwise
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// What a polling session reports back
#[derive(Debug)]
pub enum PollEvent {
    /// A fresh snapshot of the watched job.
    Update { session: u64, job: VideoJob },
    /// The status fetch failed and the session is over.
    Failed { session: u64 },
}

impl PollEvent {
    /// The session this event belongs to.
    pub fn session(&self) -> u64 {
        match self {
            Self::Update { session, .. } | Self::Failed { session } => *session,
        }
    }
}

/// Polls one extraction job at a time and stamps every event with a
/// session counter, so consumers can tell fresh snapshots from those of
/// a session that was stopped or replaced.
pub struct JobPoller {
    client: Arc<ExtractorClient>,
    interval: Duration,
    events: mpsc::UnboundedSender<PollEvent>,
    session: u64,
    task: Option<JoinHandle<()>>,
}

impl JobPoller {
    /// Creates a poller together with the receiving end of its event channel.
    pub fn new(
        client: Arc<ExtractorClient>,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PollEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let poller = Self {
            client,
            interval,
            events,
            session: 0,
            task: None,
        };
        (poller, receiver)
    }

    /// The session stamp carried by events of the current polling run.
    /// Events stamped with anything else are stale.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether a background polling task is currently alive.
    pub fn is_polling(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Starts watching `job_id`, replacing any session already underway.
    ///
    /// The first status fetch happens before this returns, so even a
    /// `start` followed by an immediate `stop` reports one snapshot. The
    /// background task only lives while the job is active: it ends itself
    /// after delivering a terminal update or a fetch failure.
    ///
    /// Returns the session stamp of the new run.
    pub async fn start(&mut self, job_id: Uuid) -> u64 {
        self.stop();
        let session = self.session;

        debug!("Polling job {} (session {})", job_id, session);

        match self.client.get_video_job(job_id).await {
            Ok(job) => {
                let terminal = job.status.is_terminal();
                let _ = self.events.send(PollEvent::Update { session, job });
                if terminal {
                    return session;
                }
            }
            Err(e) => {
                warn!("Status fetch for job {} failed: {}", job_id, e);
                let _ = self.events.send(PollEvent::Failed { session });
                return session;
            }
        }

        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        let interval = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            // Each fetch is awaited before the next tick; a slow fetch skips
            // missed ticks instead of bursting to catch up.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                match client.get_video_job(job_id).await {
                    Ok(job) => {
                        let terminal = job.status.is_terminal();
                        if events.send(PollEvent::Update { session, job }).is_err() {
                            return;
                        }
                        if terminal {
                            debug!("Job {} reached a terminal state, polling done", job_id);
                            return;
                        }
                    }
                    Err(e) => {
                        warn!("Status fetch for job {} failed: {}", job_id, e);
                        let _ = events.send(PollEvent::Failed { session });
                        return;
                    }
                }
            }
        }));

        session
    }

    /// Stops the current session.
    ///
    /// Idempotent. Retires the session stamp, so events the stopped task
    /// already queued are recognizable as stale.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.session += 1;
    }
}

impl Drop for JobPoller {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
