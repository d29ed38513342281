//! Bucket Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `bucket-setup` bootstrap tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          bucket-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (SetupService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (RemoteLookup, Workspace,              │
//! │   SourceControl, PagesAdmin)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     bucket-adapters (Infrastructure)    │
//! │   (GitCli, GhCli, LocalWorkspace, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (RepoSlug, ScaffoldPlan, Metadata)     │
//! │        No I/O, No Subprocesses          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bucket_core::application::{PublishOptions, SetupService};
//!
//! // Wire a service with injected adapters, then run the bootstrap.
//! let service = SetupService::new(remote, workspace, source_control, pages);
//! let report = service.run(&PublishOptions::default())?;
//! println!("pushed: {}", report.pushed);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PublishOptions, SetupReport, SetupService,
        ports::{PagesAdmin, RemoteLookup, SourceControl, Workspace},
    };
    pub use crate::domain::{DepositMetadata, RenderContext, RepoSlug, ScaffoldFile, ScaffoldPlan};
    pub use crate::error::{BucketError, BucketResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
