// Common error types for rename-project

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid project name '{0}'. Use only letters, numbers, hyphens, or underscores.")]
    Validation(String),

    #[error("Error reading or writing {file}: {message}")]
    FileIo { file: String, message: String },

    #[error("Unable to rename the project folder to '{}': {message}", .target.display())]
    DirectoryRename {
        target: std::path::PathBuf,
        message: String,
    },

    #[error("Could not delete {}: {message}", .path.display())]
    SelfDelete {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RenameError>;

/// A fatal error rendered for the operator, paired with the process exit code
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_rename_error(err: &RenameError) -> Self {
        let hint = match err {
            RenameError::Validation(_) => None,
            RenameError::Io(_) => Some(
                "Run the command from inside the project folder you want to rename.".to_string(),
            ),
            RenameError::Config(_) => Some(
                "Pass --project-dir to point at the project folder explicitly.".to_string(),
            ),
            _ => None,
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("❌ {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{}", hint);
        }
    }
}
