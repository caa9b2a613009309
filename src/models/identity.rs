use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::error::{RenameError, Result};
use crate::utils::validation::validate_project_name;

/// A project name that has passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self> {
        validate_project_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = RenameError;

    fn try_from(value: String) -> Result<Self> {
        validate_project_name(&value)?;
        Ok(Self(value))
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The old name (taken from the project folder) and the new one (from the operator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdentity {
    pub old_name: String,
    pub new_name: ProjectName,
}

/// Paths resolved once at start. They are never re-resolved after the rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// Current project folder
    pub root: PathBuf,
    /// Sibling folder the project is renamed to
    pub new_path: PathBuf,
}

impl ProjectPaths {
    /// Compute the paths for renaming `root` to `new_name`, returning the old name too.
    pub fn resolve(root: &Path, new_name: &ProjectName) -> Result<(Self, ProjectIdentity)> {
        let old_name = root
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RenameError::Config(format!(
                    "Cannot derive a project name from {}",
                    root.display()
                ))
            })?
            .to_string();

        let parent = root.parent().ok_or_else(|| {
            RenameError::Config(format!("{} has no parent directory", root.display()))
        })?;

        let paths = Self {
            root: root.to_path_buf(),
            new_path: parent.join(new_name.as_str()),
        };
        let identity = ProjectIdentity {
            old_name,
            new_name: new_name.clone(),
        };

        Ok((paths, identity))
    }
}
