use futures_util::future::join_all;

use crate::models::identity::{ProjectIdentity, ProjectName, ProjectPaths};
use crate::models::outcome::{RenameReport, TaskOutcome};
use crate::services::cleanup::{cleanup_artifact, skip_artifact, Cleanup};
use crate::services::directory_renamer::rename_project_dir;
use crate::services::file_rewriter::update_target_file;
use crate::utils::config::RenameConfig;
use crate::utils::error::Result;

/// Drives one rename: file rewrites, folder rename, then the cleanup step
#[derive(Debug, Clone)]
pub struct Renamer<C> {
    config: RenameConfig,
    cleanup: C,
}

impl<C: Cleanup> Renamer<C> {
    pub const fn new(config: RenameConfig, cleanup: C) -> Self {
        Self { config, cleanup }
    }

    pub const fn config(&self) -> &RenameConfig {
        &self.config
    }

    /// Resolve the paths and old name for renaming the configured root to `new_name`
    pub fn resolve(&self, new_name: &ProjectName) -> Result<(ProjectPaths, ProjectIdentity)> {
        ProjectPaths::resolve(&self.config.project_root, new_name)
    }

    /// Rewrite the target files and rename the folder.
    ///
    /// Every task is attempted regardless of earlier failures. The returned report
    /// is only built once all of them finished.
    pub async fn process(&self, paths: &ProjectPaths, identity: ProjectIdentity) -> RenameReport {
        tracing::info!(
            old = %identity.old_name,
            new = %identity.new_name,
            root = %paths.root.display(),
            "renaming project"
        );

        let mut outcomes = self.update_files(paths, &identity).await;

        // Target paths point into the old root, so the folder moves only after every rewrite finished
        let step = rename_project_dir(paths, &identity).await;
        outcomes.push(step.outcome);

        let report = RenameReport::new(identity, outcomes, step.project_dir);
        tracing::debug!(
            succeeded = report.all_succeeded(),
            failures = report.failures().count(),
            "all update tasks finished"
        );
        report
    }

    async fn update_files(&self, paths: &ProjectPaths, identity: &ProjectIdentity) -> Vec<TaskOutcome> {
        let old = identity.old_name.as_str();
        let new = identity.new_name.as_str();

        join_all(
            self.config
                .target_files
                .iter()
                .map(|file| update_target_file(&paths.root, file, old, new)),
        )
        .await
    }

    /// Delete the setup script from wherever the project now lives, if the run succeeded.
    pub async fn finalize(&self, report: &mut RenameReport) {
        let script = report.project_dir.join(&self.config.script_name);
        let succeeded = report.all_succeeded();

        report.cleanup = if self.config.keep_script {
            skip_artifact(&script, succeeded)
        } else {
            cleanup_artifact(&self.cleanup, script, succeeded).await
        };
    }
}
