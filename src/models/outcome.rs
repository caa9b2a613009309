use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::identity::ProjectIdentity;

/// Category of an independent update task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    FileUpdate,
    DirectoryRename,
}

/// How a single task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task changed something
    Succeeded,
    /// Nothing to do (missing file, destination already present); not a failure
    Skipped,
    /// The task failed; the run is reported as degraded
    Failed,
}

/// Result of one file update or the directory rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub kind: TaskKind,
    /// File name for file updates, destination path for the rename
    pub target: String,
    pub status: TaskStatus,
    pub message: String,
    /// Number of occurrences replaced, for file updates that ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<usize>,
}

impl TaskOutcome {
    pub fn file_updated(file: &str, replacements: usize) -> Self {
        Self {
            kind: TaskKind::FileUpdate,
            target: file.to_string(),
            status: TaskStatus::Succeeded,
            message: format!("Updated {}", file),
            replacements: Some(replacements),
        }
    }

    pub fn file_missing(file: &str) -> Self {
        Self {
            kind: TaskKind::FileUpdate,
            target: file.to_string(),
            status: TaskStatus::Skipped,
            message: format!("{} not found, skipped", file),
            replacements: None,
        }
    }

    pub fn file_failed(file: &str, message: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::FileUpdate,
            target: file.to_string(),
            status: TaskStatus::Failed,
            message: message.into(),
            replacements: None,
        }
    }

    pub fn directory_renamed(new_name: &str, destination: &std::path::Path) -> Self {
        Self {
            kind: TaskKind::DirectoryRename,
            target: destination.display().to_string(),
            status: TaskStatus::Succeeded,
            message: format!("Project folder renamed to '{}'.", new_name),
            replacements: None,
        }
    }

    pub fn directory_exists(destination: &std::path::Path) -> Self {
        Self {
            kind: TaskKind::DirectoryRename,
            target: destination.display().to_string(),
            status: TaskStatus::Skipped,
            message: "A folder with the new name already exists. Skipping folder rename."
                .to_string(),
            replacements: None,
        }
    }

    pub fn directory_rename_failed(destination: &std::path::Path, message: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::DirectoryRename,
            target: destination.display().to_string(),
            status: TaskStatus::Failed,
            message: message.into(),
            replacements: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == TaskStatus::Failed
    }
}

/// What happened to the setup script at the end of the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CleanupStatus {
    /// Some task failed, the script is kept for debugging
    NotAttempted,
    /// Disabled by the operator
    Disabled,
    Deleted { path: PathBuf },
    Failed { path: PathBuf, message: String },
}

/// Every task outcome of one run, folded once after all tasks finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub identity: ProjectIdentity,
    pub outcomes: Vec<TaskOutcome>,
    /// Folder the project lives in after the run
    pub project_dir: PathBuf,
    pub cleanup: CleanupStatus,
}

impl RenameReport {
    pub fn new(identity: ProjectIdentity, outcomes: Vec<TaskOutcome>, project_dir: PathBuf) -> Self {
        Self {
            identity,
            outcomes,
            project_dir,
            cleanup: CleanupStatus::NotAttempted,
        }
    }

    /// True when no task failed; skipped tasks count as success
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|outcome| !outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_failure())
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().filter_map(|outcome| outcome.replacements).sum()
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.all_succeeded() {
            RunOutcome::Completed
        } else {
            RunOutcome::Degraded
        }
    }
}

/// The three narratives a run can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The new name was invalid; nothing was touched
    Rejected,
    /// At least one task failed; the script was kept
    Degraded,
    /// Every task succeeded
    Completed,
}

impl RunOutcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::Rejected => 1,
            Self::Degraded => 2,
        }
    }
}
