use anyhow::Context;
use std::path::Path;
use tokio::fs;

use crate::models::outcome::TaskOutcome;
use crate::utils::error::RenameError;

/// Replace every literal occurrence of `old` with `new`.
///
/// Matching is case-sensitive and not word-bounded, so `old` is also replaced
/// inside longer tokens. Returns the new text and the number of replacements.
pub fn replace_all(content: &str, old: &str, new: &str) -> (String, usize) {
    if old.is_empty() {
        return (content.to_string(), 0);
    }
    let count = content.matches(old).count();
    (content.replace(old, new), count)
}

/// Rewrite one file in place. `Ok(None)` means the file does not exist.
pub async fn rewrite_file(path: &Path, old: &str, new: &str) -> anyhow::Result<Option<usize>> {
    if !matches!(fs::try_exists(path).await, Ok(true)) {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (updated, count) = replace_all(&content, old, new);

    fs::write(path, updated)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(Some(count))
}

/// Update a single target file under `root`, turning any failure into a failed outcome.
pub async fn update_target_file(root: &Path, file: &str, old: &str, new: &str) -> TaskOutcome {
    let path = root.join(file);

    match rewrite_file(&path, old, new).await {
        Ok(Some(count)) => {
            tracing::info!(file, replacements = count, "file rewritten");
            TaskOutcome::file_updated(file, count)
        }
        Ok(None) => {
            tracing::debug!(file, "file not present, skipping");
            TaskOutcome::file_missing(file)
        }
        Err(err) => {
            let err = RenameError::FileIo {
                file: file.to_string(),
                message: format!("{:#}", err),
            };
            tracing::warn!(file, error = %err, "file update failed");
            TaskOutcome::file_failed(file, err.to_string())
        }
    }
}
