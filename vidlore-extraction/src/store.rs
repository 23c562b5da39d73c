//! Persistence for the active extraction job id
//!
//! The id of an in-flight job is the only client state that survives a
//! restart. It exists so a new session can pick up watching a job the
//! previous session submitted.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::warn;
use uuid::Uuid;

/// Where the active job id lives between sessions
pub trait JobStore: Send {
    /// Remembers `job_id` as the active extraction.
    fn save(&mut self, job_id: Uuid) -> io::Result<()>;

    /// Returns the remembered job id, if any.
    fn load(&self) -> io::Result<Option<Uuid>>;

    /// Forgets the remembered job id. Clearing an empty store is fine.
    fn clear(&mut self) -> io::Result<()>;
}

/// File-backed store keeping the job id as text in a single well-known file
pub struct FileJobStore {
    path: PathBuf,
}

impl FileJobStore {
    /// Creates a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `active-job` under the vidlore state directory,
    /// falling back to the cache directory, then the system temp dir.
    pub fn default_path() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join("vidlore")
            .join("active-job")
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl JobStore for FileJobStore {
    fn save(&mut self, job_id: Uuid) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, job_id.to_string())
    }

    fn load(&self) -> io::Result<Option<Uuid>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match Uuid::parse_str(contents.trim()) {
                Ok(id) => Ok(Some(id)),
                Err(_) => {
                    warn!(
                        "Job store file {} held something other than a job id, ignoring it",
                        self.path.display()
                    );
                    Ok(None)
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory store for tests and embedders that do not want persistence.
///
/// Clones share the same slot, so a test can hand one handle to a
/// controller and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryJobStore {
    slot: Arc<Mutex<Option<Uuid>>>,
}

impl MemoryJobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> io::Result<std::sync::MutexGuard<'_, Option<Uuid>>> {
        self.slot
            .lock()
            .map_err(|_| io::Error::other("job store mutex poisoned"))
    }
}

impl JobStore for MemoryJobStore {
    fn save(&mut self, job_id: Uuid) -> io::Result<()> {
        *self.slot()? = Some(job_id);
        Ok(())
    }

    fn load(&self) -> io::Result<Option<Uuid>> {
        Ok(*self.slot()?)
    }

    fn clear(&mut self) -> io::Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
