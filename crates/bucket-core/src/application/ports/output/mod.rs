//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bucket-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::RepoSlug;
use crate::error::BucketResult;

/// Port for reading the ambient git remote configuration.
///
/// Implemented by:
/// - `bucket_adapters::GitCli` (production, `git remote -v`)
///
/// This is the one piece of ambient state the tool depends on; making it a
/// port lets tests substitute a fixture instead of a real repository.
#[cfg_attr(test, automock)]
pub trait RemoteLookup: Send + Sync {
    /// Raw stdout of the "list remotes" command, one remote per line.
    fn list_remotes(&self) -> BucketResult<String>;
}

/// Port for file writes in the working directory.
///
/// Implemented by:
/// - `bucket_adapters::LocalWorkspace` (production)
/// - `bucket_adapters::MemoryWorkspace` (testing)
#[cfg_attr(test, automock)]
pub trait Workspace: Send + Sync {
    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> BucketResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for source-control operations in the working directory.
///
/// Implemented by:
/// - `bucket_adapters::GitCli` (production)
#[cfg_attr(test, automock)]
pub trait SourceControl: Send + Sync {
    /// Stage every change in the working directory.
    fn stage_all(&self) -> BucketResult<()>;

    /// Whether anything is staged or otherwise differs from HEAD.
    fn has_changes(&self) -> BucketResult<bool>;

    /// Create a commit with the given message.
    fn commit(&self, message: &str) -> BucketResult<()>;

    /// Push a branch to a remote.
    fn push(&self, remote: &str, branch: &str) -> BucketResult<()>;
}

/// Port for the hosting platform's publishing feature.
///
/// Implemented by:
/// - `bucket_adapters::GhCli` (production, `gh api`)
#[cfg_attr(test, automock)]
pub trait PagesAdmin: Send + Sync {
    /// Enable static publishing for the repository, serving from `branch`.
    fn enable(&self, slug: &RepoSlug, branch: &str) -> BucketResult<()>;
}
