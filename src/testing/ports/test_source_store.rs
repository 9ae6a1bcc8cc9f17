//! Test double for `SourceStore`.

use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::SourceStore;

use super::test_files::TestFiles;

/// In-memory implementation of `SourceStore` that counts writes.
#[derive(Clone, Debug)]
pub struct MockSourceStore {
    files: TestFiles,
    writes: Arc<Mutex<usize>>,
}

impl MockSourceStore {
    pub fn new(files: TestFiles) -> Self {
        Self { files, writes: Arc::new(Mutex::new(0)) }
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SourceStore for MockSourceStore {
    fn exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write(&self, path: &str, content: &str) -> Result<(), AppError> {
        *self.writes.lock().unwrap() += 1;
        self.files.add(path, content);
        Ok(())
    }
}
