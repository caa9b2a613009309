use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::outcome::CleanupStatus;
use crate::utils::error::RenameError;

/// Removes the setup script once a run has fully succeeded
pub trait Cleanup {
    fn remove(&self, path: &Path) -> impl Future<Output = io::Result<()>> + Send;
}

/// Deletes the artifact from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCleanup;

impl Cleanup for FileCleanup {
    fn remove(&self, path: &Path) -> impl Future<Output = io::Result<()>> + Send {
        let path = path.to_path_buf();
        async move { tokio::fs::remove_file(path).await }
    }
}

/// Run the cleanup step for `path`, only when `succeeded` holds.
pub async fn cleanup_artifact<C: Cleanup>(cleanup: &C, path: PathBuf, succeeded: bool) -> CleanupStatus {
    if !succeeded {
        tracing::debug!(path = %path.display(), "run degraded, keeping script");
        return CleanupStatus::NotAttempted;
    }

    match cleanup.remove(&path).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "setup script deleted");
            CleanupStatus::Deleted { path }
        }
        Err(e) => {
            let err = RenameError::SelfDelete {
                path: path.clone(),
                message: e.to_string(),
            };
            tracing::warn!(error = %err, "setup script deletion failed");
            CleanupStatus::Failed {
                path,
                message: e.to_string(),
            }
        }
    }
}

/// Status for a run where the operator asked to keep the script
pub fn skip_artifact(path: &Path, succeeded: bool) -> CleanupStatus {
    if succeeded {
        tracing::debug!(path = %path.display(), "script deletion disabled");
        CleanupStatus::Disabled
    } else {
        CleanupStatus::NotAttempted
    }
}
