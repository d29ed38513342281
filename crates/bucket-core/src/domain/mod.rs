//! Core domain layer for bucket-setup.
//!
//! This module contains pure business logic with no I/O: parsing the remote
//! URL into a [`RepoSlug`], rendering the scaffold templates, and building
//! the archival deposit metadata. Subprocess and filesystem concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod error;
pub mod metadata;
pub mod remote;
pub mod render;
pub mod scaffold;

// Re-exports for convenience
pub use error::DomainError;
pub use metadata::{Creator, DepositMetadata, RelatedIdentifier, Subject};
pub use remote::RepoSlug;
pub use render::{RenderContext, escape_html};
pub use scaffold::{ScaffoldFile, ScaffoldPlan};
