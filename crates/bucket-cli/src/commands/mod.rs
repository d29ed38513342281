//! Command handlers.

pub mod completions;
pub mod resolve;
pub mod setup;

use bucket_adapters::{GhCli, GitCli, LocalWorkspace};
use bucket_core::application::SetupService;

/// Wire the production adapters into a [`SetupService`].
pub(crate) fn build_service() -> SetupService {
    SetupService::new(
        Box::new(GitCli::new()),
        Box::new(LocalWorkspace::new()),
        Box::new(GitCli::new()),
        Box::new(GhCli::new()),
    )
}
