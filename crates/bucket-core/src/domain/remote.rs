//! Remote URL resolution.
//!
//! Recovers the GitHub owner and repository name from the output of
//! `git remote -v`. Only the first line is considered; both remote shapes
//! git configures are accepted:
//!
//! - `https://github.com/owner/repo.git`
//! - `git@github.com:owner/repo.git`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

/// One pattern covers both the SSH (`:`) and HTTPS (`/`) separators; the
/// repo capture excludes `.` so a trailing `.git` is never swallowed.
static GITHUB_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/\s]+)/([^/\s.]+)").expect("remote pattern is valid")
});

/// Owner/repository pair parsed from a GitHub remote URL.
///
/// Both components are guaranteed non-empty by construction; no further
/// validation is applied (GitHub's own naming rules are not enforced here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Parse a single remote URL.
    pub fn from_url(url: &str) -> Result<Self, DomainError> {
        let caps = GITHUB_REMOTE
            .captures(url)
            .ok_or_else(|| DomainError::UnparseableRemote {
                url: url.trim().to_string(),
            })?;

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }

    /// Parse the raw output of a "list remotes" command.
    ///
    /// The first line is the candidate URL; anything after it is ignored.
    pub fn from_remote_output(output: &str) -> Result<Self, DomainError> {
        let first_line = output.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return Err(DomainError::EmptyRemote);
        }
        Self::from_url(first_line)
    }

    /// The GitHub account that owns the repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name, without any `.git` suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Canonical HTTPS URL of the repository.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ssh_url() {
        let slug = RepoSlug::from_url("git@github.com:dustproject/dust.git").unwrap();
        assert_eq!(slug.owner(), "dustproject");
        assert_eq!(slug.repo(), "dust");
    }

    #[test]
    fn parses_https_url() {
        let slug = RepoSlug::from_url("https://github.com/dustproject/dust.git").unwrap();
        assert_eq!(slug.owner(), "dustproject");
        assert_eq!(slug.repo(), "dust");
    }

    #[test]
    fn parses_url_without_git_suffix() {
        let slug = RepoSlug::from_url("https://github.com/alice/dharma-notes").unwrap();
        assert_eq!(slug.owner(), "alice");
        assert_eq!(slug.repo(), "dharma-notes");
    }

    #[test]
    fn takes_first_line_of_remote_listing() {
        let output = "origin\thttps://github.com/alice/dharma-notes.git (fetch)\n\
                      origin\thttps://github.com/alice/dharma-notes.git (push)\n";
        let slug = RepoSlug::from_remote_output(output).unwrap();
        assert_eq!(slug.owner(), "alice");
        assert_eq!(slug.repo(), "dharma-notes");
    }

    #[test]
    fn ssh_remote_listing() {
        let output = "origin\tgit@github.com:bob/sutra-archive.git (fetch)\n";
        let slug = RepoSlug::from_remote_output(output).unwrap();
        assert_eq!(slug.owner(), "bob");
        assert_eq!(slug.repo(), "sutra-archive");
    }

    #[test]
    fn non_github_host_is_rejected() {
        let err = RepoSlug::from_url("https://gitlab.com/alice/project.git").unwrap_err();
        assert!(matches!(err, DomainError::UnparseableRemote { .. }));
    }

    #[test]
    fn empty_listing_is_rejected() {
        assert_eq!(
            RepoSlug::from_remote_output(""),
            Err(DomainError::EmptyRemote)
        );
        assert_eq!(
            RepoSlug::from_remote_output("\n\n"),
            Err(DomainError::EmptyRemote)
        );
    }

    #[test]
    fn github_url_is_canonical() {
        let slug = RepoSlug::from_url("git@github.com:bob/sutra-archive.git").unwrap();
        assert_eq!(slug.github_url(), "https://github.com/bob/sutra-archive");
    }

    #[test]
    fn display_is_owner_slash_repo() {
        let slug = RepoSlug::from_url("https://github.com/alice/dharma-notes.git").unwrap();
        assert_eq!(slug.to_string(), "alice/dharma-notes");
    }
}
