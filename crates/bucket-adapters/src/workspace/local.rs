//! Local workspace adapter using std::fs.

use std::io;
use std::path::Path;

use bucket_core::{application::ports::Workspace, error::BucketResult};

/// Production workspace implementation writing to the current directory.
#[derive(Debug, Clone, Copy)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    /// Create a new local workspace adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for LocalWorkspace {
    fn write_file(&self, path: &Path, content: &str) -> BucketResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> bucket_core::error::BucketError {
    use bucket_core::application::ApplicationError;

    ApplicationError::WorkspaceError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
