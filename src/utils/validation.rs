// Validation of operator-supplied project names

use regex::Regex;
use std::sync::OnceLock;

use crate::utils::error::{RenameError, Result};

/// Pattern a new project name must fully match
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

fn project_name_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is valid"))
}

/// Validate a new project name: non-empty, letters, digits, hyphens and underscores only.
///
/// The whole input must match; nothing is trimmed or normalised here.
pub fn validate_project_name(name: &str) -> Result<()> {
    if project_name_regex().is_match(name) {
        Ok(())
    } else {
        Err(RenameError::Validation(name.to_string()))
    }
}

/// Strip the line terminator left by an interactive read.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}
