//! GitHub Pages adapter.
//!
//! Implements [`PagesAdmin`] through the `gh` CLI, which carries its own
//! authentication (`gh auth login`).

use bucket_core::{application::ports::PagesAdmin, domain::RepoSlug, error::BucketResult};

use crate::command::run;

/// GitHub CLI adapter for the Pages administrative API.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli;

impl GhCli {
    pub fn new() -> Self {
        Self
    }
}

impl PagesAdmin for GhCli {
    fn enable(&self, slug: &RepoSlug, branch: &str) -> BucketResult<()> {
        let endpoint = format!("/repos/{}/{}/pages", slug.owner(), slug.repo());
        let source = format!("source={branch}");
        run("gh", &["api", "-X", "PUT", &endpoint, "-f", &source])?;
        Ok(())
    }
}
