//! Storage of the generated source file.

use crate::domain::AppError;

/// Port for reading and writing the target file.
///
/// Paths are passed through exactly as configured; implementations decide
/// how to resolve relative paths.
pub trait SourceStore {
    /// Check whether the target exists.
    fn exists(&self, path: &str) -> bool;

    /// Read the whole file as UTF-8 text.
    fn read(&self, path: &str) -> Result<String, AppError>;

    /// Replace the file with `content` in a single write, creating parent
    /// directories as needed.
    fn write(&self, path: &str, content: &str) -> Result<(), AppError>;
}
