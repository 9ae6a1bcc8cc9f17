//! `SourceStore` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::SourceStore;

use super::FilesystemStore;

impl SourceStore for FilesystemStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path)).map_err(AppError::from)
    }

    fn write(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }
}
