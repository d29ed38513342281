//! Implementation of the `bucket-setup setup` command.
//!
//! Responsibility: wire the production adapters, call the core setup
//! service, and display progress. No business logic lives here.

use tracing::{info, instrument};

use bucket_core::application::PublishOutcome;

use crate::{
    cli::{GlobalArgs, SetupArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bucket-setup setup` command.
///
/// Dispatch sequence:
/// 1. Resolve the owner/repo pair and render the plan (read-only)
/// 2. Early-exit if `--dry-run`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Write the scaffold
/// 5. Stage/commit/push (skipped on a clean tree)
/// 6. Enable GitHub Pages
#[instrument(skip_all)]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_service();
    let opts = config.publish_options();

    // 1. Resolve + render. Nothing is written if the remote can't be read
    //    or parsed.
    let (slug, plan) = service.plan().map_err(CliError::Core)?;
    output.print(&format!("GitHub Username: {}", slug.owner()))?;
    output.print(&format!("Repository Name: {}", slug.repo()))?;

    // 2. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would write {} files and publish {} to {}/{}",
            plan.len(),
            slug,
            opts.remote,
            opts.branch,
        ))?;
        for file in plan.files() {
            output.print(&format!("  {}", file.path().display()))?;
        }
        return Ok(());
    }

    // 3. Confirm before mutating anything.
    if !global.quiet && !args.yes && !confirm()? {
        return Err(CliError::Cancelled);
    }

    // 4. Write the scaffold.
    output.header(&format!("Bootstrapping {slug}..."))?;
    output.print("Writing files...")?;
    let written = service.write(&plan).map_err(CliError::Core)?;
    info!(files = written.len(), "Scaffold written");

    // 5. Commit and push.
    output.print("Committing files to GitHub...")?;
    match service.publish(&opts).map_err(CliError::Core)? {
        PublishOutcome::Pushed => {
            info!("Changes pushed");
        }
        PublishOutcome::NothingToCommit => {
            output.info("Nothing to commit; working tree already up to date")?;
        }
    }

    // 6. Enable the Pages site.
    output.print("Setting up GitHub Pages...")?;
    service.enable_pages(&slug, &opts).map_err(CliError::Core)?;

    output.success("Done! You can rm this setup file now :)")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
