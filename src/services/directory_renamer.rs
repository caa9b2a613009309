use std::path::PathBuf;
use tokio::fs;

use crate::models::identity::{ProjectIdentity, ProjectPaths};
use crate::models::outcome::TaskOutcome;
use crate::utils::error::RenameError;

/// Outcome of the rename together with where the project lives afterwards
#[derive(Debug, Clone)]
pub struct RenameStep {
    pub outcome: TaskOutcome,
    /// `new_path` when the rename happened, the original root otherwise
    pub project_dir: PathBuf,
}

/// Rename the project folder to its sibling `new_path`.
///
/// An existing entry at the destination is left alone and reported as skipped.
pub async fn rename_project_dir(paths: &ProjectPaths, identity: &ProjectIdentity) -> RenameStep {
    let destination = &paths.new_path;

    if matches!(fs::try_exists(destination).await, Ok(true)) {
        tracing::info!(destination = %destination.display(), "destination already exists");
        return RenameStep {
            outcome: TaskOutcome::directory_exists(destination),
            project_dir: paths.root.clone(),
        };
    }

    match fs::rename(&paths.root, destination).await {
        Ok(()) => {
            tracing::info!(
                from = %paths.root.display(),
                to = %destination.display(),
                "project folder renamed"
            );
            RenameStep {
                outcome: TaskOutcome::directory_renamed(identity.new_name.as_str(), destination),
                project_dir: destination.clone(),
            }
        }
        Err(e) => {
            let err = RenameError::DirectoryRename {
                target: destination.clone(),
                message: e.to_string(),
            };
            tracing::warn!(error = %err, "project folder rename failed");
            RenameStep {
                outcome: TaskOutcome::directory_rename_failed(
                    destination,
                    format!("{}. Please rename it manually.", err),
                ),
                project_dir: paths.root.clone(),
            }
        }
    }
}
