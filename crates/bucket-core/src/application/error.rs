//! Application layer errors.
//!
//! These errors represent failures in orchestration: external commands
//! exiting non-zero and workspace writes failing. Parse failures are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// An external command exited non-zero.
    ///
    /// `code` is the process exit code, or `-1` when the process was killed
    /// by a signal or could not be spawned at all.
    #[error("`{command}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// A workspace write failed.
    #[error("workspace error at {path}: {reason}")]
    WorkspaceError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { command, .. } => {
                let mut out = Vec::new();
                if command.starts_with("git remote") {
                    out.push("Is this directory a git repository?".into());
                }
                if command.starts_with("gh ") {
                    out.push("Is the GitHub CLI installed and authenticated? Try: gh auth status".into());
                }
                out.push(format!("The command was: {command}"));
                out.push("See the captured stderr above for details".into());
                out
            }
            Self::WorkspaceError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions in the working directory".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } => ErrorCategory::Execution,
            Self::WorkspaceError { .. } => ErrorCategory::Internal,
        }
    }
}
