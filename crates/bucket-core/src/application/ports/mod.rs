//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bucket-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RemoteLookup`: read the configured git remotes
//!   - `Workspace`: file writes in the working directory
//!   - `SourceControl`: stage, commit, push
//!   - `PagesAdmin`: the hosting platform's publishing API
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{PagesAdmin, RemoteLookup, SourceControl, Workspace};

#[cfg(test)]
pub use output::{MockPagesAdmin, MockRemoteLookup, MockSourceControl, MockWorkspace};
