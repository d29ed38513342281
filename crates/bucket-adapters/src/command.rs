//! Shared subprocess execution.
//!
//! Every external invocation goes through [`run`]: spawn, block until exit,
//! capture both streams, and turn a non-zero exit into
//! `ApplicationError::CommandFailed` carrying the exit code and stderr.
//! No timeouts are enforced; a hung network call blocks indefinitely.

use std::process::Command;

use tracing::debug;

use bucket_core::{application::ApplicationError, error::BucketResult};

/// Run `program` with `args`, returning captured stdout on success.
pub(crate) fn run(program: &str, args: &[&str]) -> BucketResult<String> {
    let command_line = format!("{program} {}", args.join(" "));
    debug!(command = %command_line, "running external command");

    let output = Command::new(program).args(args).output().map_err(|e| {
        ApplicationError::CommandFailed {
            command: command_line.clone(),
            code: -1,
            stderr: format!("failed to spawn ({e}); is `{program}` installed?"),
        }
    })?;

    if !output.status.success() {
        return Err(ApplicationError::CommandFailed {
            command: command_line,
            // -1 when killed by a signal
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
