use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// What happened to a file once its deletion came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReapOutcome {
    Deleted { size: u64 },
    Missing,
    Failed(String),
}

/// Deletes generated documents some time after they were handed out
#[derive(Debug, Clone, Copy)]
pub struct FileReaper {
    delay: Duration,
}

impl FileReaper {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Delete `path` after the configured delay
    pub fn schedule_default(&self, path: PathBuf) -> JoinHandle<ReapOutcome> {
        self.schedule(path, self.delay)
    }

    /// Spawn a task that sleeps `delay`, then deletes `path`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, path: PathBuf, delay: Duration) -> JoinHandle<ReapOutcome> {
        info!("Scheduled deletion of {:?} in {:?}", path, delay);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            reap(&path).await
        })
    }
}

/// Delete `path` now, logging the outcome
pub async fn reap(path: &Path) -> ReapOutcome {
    let size = match tokio::fs::metadata(path).await {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("File to delete is already gone: {:?}", path);
            return ReapOutcome::Missing;
        }
        Err(e) => {
            error!("Failed to stat {:?} for deletion: {}", path, e);
            return ReapOutcome::Failed(e.to_string());
        }
    };

    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            info!("Deleted file {:?} ({} bytes)", path, size);
            ReapOutcome::Deleted { size }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("File to delete is already gone: {:?}", path);
            ReapOutcome::Missing
        }
        Err(e) => {
            error!("Failed to delete {:?}: {}", path, e);
            ReapOutcome::Failed(e.to_string())
        }
    }
}
