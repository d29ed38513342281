use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The first remote line did not contain a recognizable GitHub URL.
    #[error("could not parse a GitHub remote from '{url}'")]
    UnparseableRemote { url: String },

    /// The remote listing was empty (repository has no remotes configured).
    #[error("no remotes are configured for this repository")]
    EmptyRemote,

    /// The deposit metadata could not be serialized to JSON.
    #[error("failed to serialize deposit metadata: {reason}")]
    MetadataSerialization { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnparseableRemote { url } => vec![
                format!("The remote '{}' does not look like a GitHub URL", url),
                "Expected https://github.com/<owner>/<repo>.git".into(),
                "      or git@github.com:<owner>/<repo>.git".into(),
                "Check: git remote -v".into(),
            ],
            Self::EmptyRemote => vec![
                "This repository has no remotes".into(),
                "Add one: git remote add origin git@github.com:<owner>/<repo>.git".into(),
            ],
            Self::MetadataSerialization { .. } => {
                vec!["This is a bug in bucket-setup, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnparseableRemote { .. } | Self::EmptyRemote => ErrorCategory::Validation,
            Self::MetadataSerialization { .. } => ErrorCategory::Internal,
        }
    }
}
