//! Git CLI adapter.
//!
//! Implements [`RemoteLookup`] and [`SourceControl`] by shelling out to the
//! `git` binary in the current working directory. Authentication is
//! whatever the ambient git configuration provides; nothing is read or
//! written here beyond the subprocess streams.

use bucket_core::{
    application::ports::{RemoteLookup, SourceControl},
    error::BucketResult,
};

use crate::command::run;

/// Production git adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteLookup for GitCli {
    fn list_remotes(&self) -> BucketResult<String> {
        run("git", &["remote", "-v"])
    }
}

impl SourceControl for GitCli {
    fn stage_all(&self) -> BucketResult<()> {
        run("git", &["add", "."])?;
        Ok(())
    }

    fn has_changes(&self) -> BucketResult<bool> {
        let status = run("git", &["status", "--porcelain"])?;
        Ok(!status.trim().is_empty())
    }

    fn commit(&self, message: &str) -> BucketResult<()> {
        run("git", &["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> BucketResult<()> {
        run("git", &["push", remote, branch])?;
        Ok(())
    }
}
