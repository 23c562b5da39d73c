//! Extraction job lifecycle for vidlore
//!
//! Everything between the typed API client and a user interface: the
//! [`JobPoller`] that watches a job's progress, the [`JobStore`] that lets
//! a new session resume a job a previous one submitted, the
//! [`VideoLibrary`] cache of extracted videos, and the
//! [`ExtractionController`] tying them together.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use vidlore_client::ExtractorClient;
//! use vidlore_extraction::{ExtractionController, FileJobStore};
//!
//! # async fn run() {
//! let client = Arc::new(ExtractorClient::new("http://localhost:8000"));
//! let store = FileJobStore::new(FileJobStore::default_path());
//! let mut controller =
//!     ExtractionController::new(client, Box::new(store), Duration::from_millis(2000));
//!
//! controller.bootstrap().await;
//! controller.extract("https://youtu.be/dQw4w9WgXcQ").await;
//! while let Some(job) = controller.next_update().await {
//!     println!("{}: {}", job.status, job.step_label);
//! }
//! # }
//! ```

pub mod controller;
pub mod library;
pub mod poller;
pub mod store;

pub use controller::{Extraction, ExtractionController};
pub use library::VideoLibrary;
pub use poller::{DEFAULT_POLL_INTERVAL, JobPoller, PollEvent};
pub use store::{FileJobStore, JobStore, MemoryJobStore};
