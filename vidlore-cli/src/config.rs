//! Configuration module
//!
//! Handles CLI configuration including the backend URL and polling settings.

use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the extractor backend
    pub api_url: String,
    /// Delay between extraction status fetches
    pub poll_interval: Duration,
    /// Override for the file keeping the active job id; `None` means the
    /// default location under the user's state directory
    pub state_file: Option<PathBuf>,
}
