// Run configuration and defaults

use std::path::{Path, PathBuf};

use crate::utils::error::{RenameError, Result};

/// Files rewritten by default, relative to the project root:
/// the package manifest, the build-tool config and the readme.
pub const DEFAULT_TARGET_FILES: [&str; 3] = ["package.json", "vite.config.js", "README.md"];

/// Script name used when the running executable's own name cannot be determined
pub const FALLBACK_SCRIPT_NAME: &str = "rename-project";

/// Install command suggested after a successful rename
pub const INSTALL_COMMAND: &str = "npm install";

/// Everything one invocation needs, resolved before any mutation happens
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Directory whose name is being changed
    pub project_root: PathBuf,
    /// Relative file names rewritten under the project root
    pub target_files: Vec<String>,
    /// File name of the setup script removed after a fully successful run
    pub script_name: String,
    /// Skip self-deletion even on success
    pub keep_script: bool,
    /// Emit the final report as JSON
    pub json: bool,
}

impl RenameConfig {
    /// Build a configuration rooted at `project_root` with the default target files
    pub fn new(project_root: PathBuf, script_name: impl Into<String>) -> Self {
        Self {
            project_root,
            target_files: DEFAULT_TARGET_FILES.iter().map(|f| (*f).to_string()).collect(),
            script_name: script_name.into(),
            keep_script: false,
            json: false,
        }
    }

    #[cfg(test)]
    pub fn with_target_files(mut self, files: Vec<String>) -> Self {
        self.target_files = files;
        self
    }

    pub fn with_keep_script(mut self, keep_script: bool) -> Self {
        self.keep_script = keep_script;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Resolve the project root: an explicit directory or the current working directory.
///
/// The result is canonicalised once so later steps never re-resolve it.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let root = root.canonicalize().map_err(|e| {
        RenameError::Config(format!("Cannot resolve project folder {}: {}", root.display(), e))
    })?;

    if !root.is_dir() {
        return Err(RenameError::Config(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// File name of the running executable, used as the default self-delete target
pub fn default_script_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| FALLBACK_SCRIPT_NAME.to_string())
}
