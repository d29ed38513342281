//! Setup Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Resolve `(owner, repo)` from the git remote
//! 2. Render the scaffold plan
//! 3. Write the artifacts
//! 4. Stage, commit, push (skipped when the tree is already clean)
//! 5. Enable the publishing feature
//!
//! The sequence is strictly linear with abort-on-first-error semantics:
//! there is no rollback, and artifacts written before a failing step stay
//! on disk.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::ports::{PagesAdmin, RemoteLookup, SourceControl, Workspace},
    domain::{RepoSlug, ScaffoldPlan},
    error::BucketResult,
};

/// Knobs for the publish step. Defaults match the original bootstrap
/// script: commit to `main` on `origin` with a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    pub remote: String,
    pub branch: String,
    pub commit_message: String,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Initial (automated) commit".to_string(),
        }
    }
}

/// What the commit/push step actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The tree was already clean; commit and push were skipped.
    NothingToCommit,
    /// A commit was created and pushed.
    Pushed,
}

/// Structured result of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    pub slug: RepoSlug,
    pub files_written: Vec<PathBuf>,
    pub committed: bool,
    pub pushed: bool,
    pub pages_enabled: bool,
}

/// Main bootstrap service.
///
/// Orchestrates remote resolution, rendering, writing, and publishing.
pub struct SetupService {
    remote: Box<dyn RemoteLookup>,
    workspace: Box<dyn Workspace>,
    source_control: Box<dyn SourceControl>,
    pages: Box<dyn PagesAdmin>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(
        remote: Box<dyn RemoteLookup>,
        workspace: Box<dyn Workspace>,
        source_control: Box<dyn SourceControl>,
        pages: Box<dyn PagesAdmin>,
    ) -> Self {
        Self {
            remote,
            workspace,
            source_control,
            pages,
        }
    }

    /// Resolve the owner/repo pair from the ambient remote configuration.
    ///
    /// Read-only; the first remote line is the candidate URL.
    #[instrument(skip_all)]
    pub fn resolve_slug(&self) -> BucketResult<RepoSlug> {
        let listing = self.remote.list_remotes()?;
        let slug = RepoSlug::from_remote_output(&listing)?;
        info!(owner = slug.owner(), repo = slug.repo(), "Remote resolved");
        Ok(slug)
    }

    /// Resolve and render without touching the filesystem (dry-run support).
    pub fn plan(&self) -> BucketResult<(RepoSlug, ScaffoldPlan)> {
        let slug = self.resolve_slug()?;
        let plan = ScaffoldPlan::for_slug(&slug)?;
        Ok((slug, plan))
    }

    /// Write every artifact in the plan, returning the paths written.
    #[instrument(skip_all, fields(files = plan.len()))]
    pub fn write(&self, plan: &ScaffoldPlan) -> BucketResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(plan.len());
        for file in plan.files() {
            self.workspace.write_file(file.path(), file.content())?;
            info!(path = %file.path().display(), "Artifact written");
            written.push(file.path().to_path_buf());
        }
        Ok(written)
    }

    /// Stage everything, then commit and push - unless the tree is clean,
    /// in which case both are skipped.
    #[instrument(skip_all)]
    pub fn publish(&self, opts: &PublishOptions) -> BucketResult<PublishOutcome> {
        self.source_control.stage_all()?;

        if !self.source_control.has_changes()? {
            info!("Working tree is clean, skipping commit and push");
            return Ok(PublishOutcome::NothingToCommit);
        }

        self.source_control.commit(&opts.commit_message)?;
        self.source_control.push(&opts.remote, &opts.branch)?;
        info!(remote = %opts.remote, branch = %opts.branch, "Pushed");
        Ok(PublishOutcome::Pushed)
    }

    /// Enable the hosting platform's publishing feature for the slug.
    #[instrument(skip_all, fields(slug = %slug))]
    pub fn enable_pages(&self, slug: &RepoSlug, opts: &PublishOptions) -> BucketResult<()> {
        self.pages.enable(slug, &opts.branch)?;
        info!("Pages enabled");
        Ok(())
    }

    /// Run the whole bootstrap in one call.
    #[instrument(skip_all)]
    pub fn run(&self, opts: &PublishOptions) -> BucketResult<SetupReport> {
        let (slug, plan) = self.plan()?;
        let files_written = self.write(&plan)?;
        let outcome = self.publish(opts)?;
        self.enable_pages(&slug, opts)?;

        let pushed = outcome == PublishOutcome::Pushed;
        Ok(SetupReport {
            slug,
            files_written,
            committed: pushed,
            pushed,
            pages_enabled: true,
        })
    }
}
