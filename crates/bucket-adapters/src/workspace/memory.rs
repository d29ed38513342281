//! In-memory workspace adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use bucket_core::{application::ports::Workspace, error::BucketResult};

/// In-memory workspace for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryWorkspace {
    /// Create a new empty memory workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.files.read().ok()?;
        files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let files = self.files.read().expect("workspace lock poisoned");
        let mut paths: Vec<_> = files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of files written so far.
    pub fn file_count(&self) -> usize {
        self.files.read().expect("workspace lock poisoned").len()
    }
}

impl Workspace for MemoryWorkspace {
    fn write_file(&self, path: &Path, content: &str) -> BucketResult<()> {
        let mut files = self.files.write().expect("workspace lock poisoned");
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().expect("workspace lock poisoned");
        files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_replace_content() {
        let ws = MemoryWorkspace::new();
        ws.write_file(Path::new("a"), "one").unwrap();
        ws.write_file(Path::new("a"), "two").unwrap();
        assert_eq!(ws.read_file(Path::new("a")).as_deref(), Some("two"));
        assert_eq!(ws.file_count(), 1);
    }

    #[test]
    fn exists_tracks_writes() {
        let ws = MemoryWorkspace::new();
        assert!(!ws.exists(Path::new("index.html")));
        ws.write_file(Path::new("index.html"), "").unwrap();
        assert!(ws.exists(Path::new("index.html")));
    }
}
