//! Filesystem adapter for the `SourceStore` port.
//!
//! `FilesystemStore` owns a base directory; relative target paths resolve
//! against it and absolute paths are used as given.

mod source_store;

use std::path::{Path, PathBuf};

/// Filesystem-backed store rooted at a working directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a configured target path against the root.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}
