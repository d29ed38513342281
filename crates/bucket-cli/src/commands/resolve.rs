//! Implementation of the `bucket-setup resolve` command.
//!
//! Read-only: prints the owner/repo pair the setup command would use,
//! without writing or publishing anything.

use tracing::instrument;

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(output: OutputManager) -> CliResult<()> {
    let service = super::build_service();
    let slug = service.resolve_slug().map_err(CliError::Core)?;

    output.print(&format!("GitHub Username: {}", slug.owner()))?;
    output.print(&format!("Repository Name: {}", slug.repo()))?;
    Ok(())
}
