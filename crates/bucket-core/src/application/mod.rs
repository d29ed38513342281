//! Application layer for bucket-setup.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All parsing and rendering rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export the service and its DTOs
pub use services::{PublishOptions, PublishOutcome, SetupReport, SetupService};

// Re-export port traits (for adapter implementation)
pub use ports::{PagesAdmin, RemoteLookup, SourceControl, Workspace};

pub use error::ApplicationError;
