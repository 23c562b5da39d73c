//! Vidlore HTTP Client
//!
//! A type-safe HTTP client for the YouTube knowledge extractor backend API.
//!
//! The backend owns all state — videos, extraction jobs, tags — and this
//! crate is the single place the rest of the workspace goes through to reach
//! it. One method per endpoint, no retries (retry policy belongs to callers
//! such as the extraction poller).
//!
//! # Example
//!
//! ```no_run
//! use vidlore_client::ExtractorClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ExtractorClient::new("http://localhost:8000");
//!
//!     // Submit a video for extraction
//!     let job = client.create_video_job("https://youtu.be/dQw4w9WgXcQ").await?;
//!
//!     println!("job {} is {}", job.id, job.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod tags;
mod videos;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the extractor backend API
///
/// Methods are grouped by resource:
/// - Extraction jobs (submit, fetch, list by status)
/// - Videos (list, fetch, update notes, delete)
/// - Tags (summaries, aliases, rename, merge, delete)
#[derive(Debug, Clone)]
pub struct ExtractorClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ExtractorClient {
    /// Create a new client for the backend at `base_url`.
    ///
    /// # Example
    /// ```
    /// use vidlore_client::ExtractorClient;
    ///
    /// let client = ExtractorClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client.
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use vidlore_client::ExtractorClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ExtractorClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body.
    ///
    /// Non-2xx responses become [`ClientError::Api`], carrying the backend's
    /// `detail` string when the error body provides one.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse JSON response: {e}")))
    }

    /// Check the status code of a response that carries no body
    /// (e.g. DELETE operations answered with 204 No Content).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        Ok(())
    }
}
