//! End-to-end tests for the bootstrap flow, run against the in-memory
//! workspace and scripted port doubles so no real git repository, network,
//! or `gh` installation is needed.

use std::path::Path;
use std::sync::{Arc, Mutex};

use bucket_adapters::MemoryWorkspace;
use bucket_core::{
    application::{
        ApplicationError, PublishOptions, PublishOutcome, SetupService,
        ports::{PagesAdmin, RemoteLookup, SourceControl},
    },
    domain::RepoSlug,
    error::{BucketError, BucketResult},
};

// ── Scripted port doubles ─────────────────────────────────────────────────────

/// Remote lookup returning a fixed listing.
struct StaticRemote(&'static str);

impl RemoteLookup for StaticRemote {
    fn list_remotes(&self) -> BucketResult<String> {
        Ok(self.0.to_string())
    }
}

/// Remote lookup failing the way `git remote -v` fails outside a repository.
struct FailingRemote;

impl RemoteLookup for FailingRemote {
    fn list_remotes(&self) -> BucketResult<String> {
        Err(ApplicationError::CommandFailed {
            command: "git remote -v".into(),
            code: 128,
            stderr: "fatal: not a git repository (or any of the parent directories): .git".into(),
        }
        .into())
    }
}

/// Source control that records the operations applied to it.
#[derive(Clone, Default)]
struct RecordingSourceControl {
    log: Arc<Mutex<Vec<String>>>,
    clean_tree: bool,
}

impl RecordingSourceControl {
    fn with_clean_tree() -> Self {
        Self {
            clean_tree: true,
            ..Self::default()
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.lock().unwrap().push(entry.into());
    }
}

impl SourceControl for RecordingSourceControl {
    fn stage_all(&self) -> BucketResult<()> {
        self.record("stage_all");
        Ok(())
    }

    fn has_changes(&self) -> BucketResult<bool> {
        self.record("has_changes");
        Ok(!self.clean_tree)
    }

    fn commit(&self, message: &str) -> BucketResult<()> {
        self.record(format!("commit: {message}"));
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> BucketResult<()> {
        self.record(format!("push: {remote} {branch}"));
        Ok(())
    }
}

/// Pages admin recording the slug/branch it was asked to enable.
#[derive(Clone, Default)]
struct RecordingPages {
    enabled: Arc<Mutex<Option<(String, String)>>>,
}

impl RecordingPages {
    fn enabled(&self) -> Option<(String, String)> {
        self.enabled.lock().unwrap().clone()
    }
}

impl PagesAdmin for RecordingPages {
    fn enable(&self, slug: &RepoSlug, branch: &str) -> BucketResult<()> {
        *self.enabled.lock().unwrap() = Some((slug.to_string(), branch.to_string()));
        Ok(())
    }
}

fn service_with(
    remote: impl RemoteLookup + 'static,
    workspace: MemoryWorkspace,
    source_control: RecordingSourceControl,
    pages: RecordingPages,
) -> SetupService {
    SetupService::new(
        Box::new(remote),
        Box::new(workspace),
        Box::new(source_control),
        Box::new(pages),
    )
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn https_remote_produces_the_full_bucket() {
    let workspace = MemoryWorkspace::new();
    let source_control = RecordingSourceControl::default();
    let pages = RecordingPages::default();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        workspace.clone(),
        source_control.clone(),
        pages.clone(),
    );

    let report = service.run(&PublishOptions::default()).unwrap();

    assert_eq!(report.slug.to_string(), "alice/dharma-notes");
    assert_eq!(
        workspace.list_files(),
        vec![
            Path::new(".nojekyll").to_path_buf(),
            Path::new(".zenodo.json").to_path_buf(),
            Path::new("CNAME").to_path_buf(),
            Path::new("README.md").to_path_buf(),
            Path::new("index.html").to_path_buf(),
        ]
    );
    assert_eq!(
        workspace.read_file(Path::new("CNAME")).as_deref(),
        Some("buddhistuniversity.net/dharma-notes")
    );
    assert_eq!(
        source_control.log(),
        vec![
            "stage_all",
            "has_changes",
            "commit: Initial (automated) commit",
            "push: origin main",
        ]
    );
    assert_eq!(
        pages.enabled(),
        Some(("alice/dharma-notes".to_string(), "main".to_string()))
    );
}

#[test]
fn ssh_remote_renders_the_homepage_title() {
    let workspace = MemoryWorkspace::new();
    let service = service_with(
        StaticRemote("origin\tgit@github.com:bob/sutra-archive.git (fetch)\n"),
        workspace.clone(),
        RecordingSourceControl::default(),
        RecordingPages::default(),
    );

    let report = service.run(&PublishOptions::default()).unwrap();

    assert_eq!(report.slug.owner(), "bob");
    assert_eq!(report.slug.repo(), "sutra-archive");
    let homepage = workspace.read_file(Path::new("index.html")).unwrap();
    assert!(homepage.contains("sutra-archive @ The Open Buddhist University"));
}

#[test]
fn failed_remote_command_writes_no_files() {
    let workspace = MemoryWorkspace::new();
    let source_control = RecordingSourceControl::default();
    let pages = RecordingPages::default();
    let service = service_with(
        FailingRemote,
        workspace.clone(),
        source_control.clone(),
        pages.clone(),
    );

    let err = service.run(&PublishOptions::default()).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("128"));
    assert!(msg.contains("fatal: not a git repository"));
    assert_eq!(workspace.file_count(), 0);
    assert!(source_control.log().is_empty());
    assert!(pages.enabled().is_none());
}

#[test]
fn non_github_remote_is_a_parse_error_and_writes_nothing() {
    let workspace = MemoryWorkspace::new();
    let source_control = RecordingSourceControl::default();
    let service = service_with(
        StaticRemote("origin\thttps://gitlab.com/alice/project.git (fetch)\n"),
        workspace.clone(),
        source_control.clone(),
        RecordingPages::default(),
    );

    let err = service.run(&PublishOptions::default()).unwrap_err();

    assert!(matches!(err, BucketError::Domain(_)));
    assert_eq!(workspace.file_count(), 0);
    assert!(source_control.log().is_empty());
}

#[test]
fn clean_tree_skips_commit_but_still_enables_pages() {
    let workspace = MemoryWorkspace::new();
    let source_control = RecordingSourceControl::with_clean_tree();
    let pages = RecordingPages::default();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        workspace.clone(),
        source_control.clone(),
        pages.clone(),
    );

    let report = service.run(&PublishOptions::default()).unwrap();

    assert!(!report.committed);
    assert!(!report.pushed);
    assert!(report.pages_enabled);
    assert_eq!(source_control.log(), vec!["stage_all", "has_changes"]);
    assert!(pages.enabled().is_some());
}

#[test]
fn publish_outcome_distinguishes_clean_from_pushed() {
    let dirty = RecordingSourceControl::default();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        MemoryWorkspace::new(),
        dirty,
        RecordingPages::default(),
    );
    let opts = PublishOptions::default();
    assert_eq!(service.publish(&opts).unwrap(), PublishOutcome::Pushed);

    let clean = RecordingSourceControl::with_clean_tree();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        MemoryWorkspace::new(),
        clean,
        RecordingPages::default(),
    );
    assert_eq!(
        service.publish(&opts).unwrap(),
        PublishOutcome::NothingToCommit
    );
}

#[test]
fn rendered_metadata_round_trips_as_json() {
    let workspace = MemoryWorkspace::new();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        workspace.clone(),
        RecordingSourceControl::default(),
        RecordingPages::default(),
    );

    service.run(&PublishOptions::default()).unwrap();

    let raw = workspace.read_file(Path::new(".zenodo.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed["title"].as_str().unwrap(),
        "The Open Buddhist University dharma-notes"
    );
    assert_eq!(
        parsed["related_identifiers"][1]["identifier"]
            .as_str()
            .unwrap(),
        "https://github.com/alice/dharma-notes"
    );
}

#[test]
fn running_twice_rewrites_identical_content() {
    let workspace = MemoryWorkspace::new();
    let service = service_with(
        StaticRemote("origin\thttps://github.com/alice/dharma-notes.git (fetch)\n"),
        workspace.clone(),
        RecordingSourceControl::default(),
        RecordingPages::default(),
    );

    service.run(&PublishOptions::default()).unwrap();
    let first = workspace.read_file(Path::new("index.html")).unwrap();
    service.run(&PublishOptions::default()).unwrap();
    let second = workspace.read_file(Path::new("index.html")).unwrap();

    assert_eq!(first, second);
    assert_eq!(workspace.file_count(), 5);
}
