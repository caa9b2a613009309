use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::models::identity::ProjectName;
use crate::models::outcome::{CleanupStatus, RenameReport, RunOutcome, TaskKind, TaskStatus};
use crate::services::cleanup::{Cleanup, FileCleanup};
use crate::services::renamer::Renamer;
use crate::utils::config::{default_script_name, resolve_project_root, RenameConfig, INSTALL_COMMAND};
use crate::utils::error::{RenameError, Result};
use crate::utils::prompt::InteractiveSession;
use crate::utils::validation::strip_line_ending;

pub const PROMPT: &str =
    "Enter the new project name (only letters, numbers, hyphens, or underscores): ";

/// Rename the current project
#[derive(Debug, Clone)]
pub struct RenameCommand {
    /// New name, prompted for when absent
    pub name: Option<String>,
    pub project_dir: Option<PathBuf>,
    pub script: Option<String>,
    pub keep_script: bool,
    pub json: bool,
}

/// JSON response format for a rename run
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResponse {
    pub outcome: RunOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RenameReport>,
}

impl RenameCommand {
    /// Execute the rename against stdin/stdout and the real filesystem
    pub async fn run(&self) -> Result<RunOutcome> {
        let renamer = Renamer::new(self.config()?, FileCleanup);
        let session = InteractiveSession::stdio();
        let (outcome, _) = execute(&renamer, self.name.as_deref(), session).await?;
        Ok(outcome)
    }

    fn config(&self) -> Result<RenameConfig> {
        let root = resolve_project_root(self.project_dir.as_deref())?;
        let script = self.script.clone().unwrap_or_else(default_script_name);

        Ok(RenameConfig::new(root, script)
            .with_keep_script(self.keep_script)
            .with_json(self.json))
    }
}

/// Run one rename through `session`, closing it on every path.
///
/// Returns the outcome and the session's writer.
pub async fn execute<R, W, C>(
    renamer: &Renamer<C>,
    name: Option<&str>,
    mut session: InteractiveSession<R, W>,
) -> Result<(RunOutcome, W)>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Cleanup,
{
    let result = drive(renamer, name, &mut session).await;
    let writer = session.close().await?;
    result.map(|outcome| (outcome, writer))
}

async fn drive<R, W, C>(
    renamer: &Renamer<C>,
    name: Option<&str>,
    session: &mut InteractiveSession<R, W>,
) -> Result<RunOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Cleanup,
{
    let json = renamer.config().json;

    let line;
    let input = match name {
        Some(name) => name,
        None => {
            line = if json {
                session.ask_on_stderr(PROMPT).await?
            } else {
                session.ask(PROMPT).await?
            };
            strip_line_ending(&line)
        }
    };

    let new_name = match ProjectName::parse(input) {
        Ok(new_name) => new_name,
        Err(err) => {
            tracing::debug!(input, "rejected project name");
            if json {
                respond(session, RunOutcome::Rejected, Some(err.to_string()), None).await?;
            } else {
                session.say(format!("❌ {}", err)).await?;
            }
            return Ok(RunOutcome::Rejected);
        }
    };

    let (paths, identity) = renamer.resolve(&new_name)?;
    if !json {
        session
            .say(format!(
                "\n🔄 Updating project name from '{}' to '{}'...",
                identity.old_name, identity.new_name
            ))
            .await?;
    }

    let mut report = renamer.process(&paths, identity).await;
    if !json {
        report_tasks(session, &report).await?;
    }

    let outcome = report.outcome();
    let script = renamer.config().script_name.as_str();

    if outcome == RunOutcome::Completed && !json {
        let dir_name = report
            .project_dir
            .file_name()
            .map_or_else(|| report.identity.new_name.to_string(), |name| name.to_string_lossy().into_owned());
        session.say("\n🎉 Renaming complete! Run these commands next:\n").await?;
        session.say(format!("cd {}", dir_name)).await?;
        session.say(INSTALL_COMMAND).await?;
    }

    renamer.finalize(&mut report).await;

    if json {
        respond(session, outcome, None, Some(report)).await?;
        return Ok(outcome);
    }

    match &report.cleanup {
        CleanupStatus::Deleted { .. } => {
            session.say("🗑️  Setup script deleted automatically.").await?;
        }
        CleanupStatus::Failed { path, message } => {
            tracing::debug!(error = %message, "cleanup failed");
            session
                .say(format!(
                    "⚠️ Could not delete {}. Please remove it manually.",
                    path.display()
                ))
                .await?;
        }
        CleanupStatus::Disabled => {
            session.say(format!("ℹ️  Keeping {} as requested.", script)).await?;
        }
        CleanupStatus::NotAttempted => {
            session
                .say(format!(
                    "\n⚠️ Setup encountered some errors. Keeping {} for debugging.",
                    script
                ))
                .await?;
        }
    }

    Ok(outcome)
}

async fn report_tasks<R, W>(session: &mut InteractiveSession<R, W>, report: &RenameReport) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for task in &report.outcomes {
        let line = match (task.kind, task.status) {
            (TaskKind::FileUpdate, TaskStatus::Succeeded) => format!("✅ {}", task.message),
            (TaskKind::FileUpdate, TaskStatus::Skipped) => continue,
            (TaskKind::FileUpdate, TaskStatus::Failed) => format!("❌ {}", task.message),
            (TaskKind::DirectoryRename, TaskStatus::Succeeded) => format!("✅ {}", task.message),
            (TaskKind::DirectoryRename, _) => format!("⚠️ {}", task.message),
        };
        session.say(line).await?;
    }
    Ok(())
}

async fn respond<R, W>(
    session: &mut InteractiveSession<R, W>,
    outcome: RunOutcome,
    message: Option<String>,
    report: Option<RenameReport>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let response = RenameResponse {
        outcome,
        message,
        report,
    };

    let json_output = serde_json::to_string_pretty(&response)
        .map_err(|e| RenameError::Config(format!("Failed to serialize JSON response: {}", e)))?;

    session.say(json_output).await
}
