//! `GITHUB_OUTPUT` adapter for the `StepOutput` port.
//!
//! Appends `key=value` lines to the file named by `GITHUB_OUTPUT`. When the
//! variable is unset (local runs), records are logged and dropped.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::StepOutput;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

#[derive(Debug, Clone, Default)]
pub struct GithubOutput {
    path: Option<PathBuf>,
}

impl GithubOutput {
    /// Write to an explicit output file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Write to the file named by `GITHUB_OUTPUT`, if set and non-empty.
    pub fn from_env() -> Self {
        let path = std::env::var_os(GITHUB_OUTPUT_ENV).filter(|p| !p.is_empty()).map(PathBuf::from);
        Self { path }
    }
}

impl StepOutput for GithubOutput {
    fn append(&self, key: &str, value: &str) -> Result<(), AppError> {
        // Records are line-based; a newline would start a new record.
        if key.contains(['\n', '\r', '=']) || value.contains(['\n', '\r']) {
            return Err(AppError::Internal(format!(
                "Step output record '{key}' must be a single line"
            )));
        }

        let Some(path) = &self.path else {
            tracing::debug!(key, value, "{GITHUB_OUTPUT_ENV} not set; skipping step output");
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
            AppError::Internal(format!("Failed to open {GITHUB_OUTPUT_ENV}: {}", e))
        })?;

        writeln!(file, "{key}={value}").map_err(|e| {
            AppError::Internal(format!("Failed to write {GITHUB_OUTPUT_ENV}: {}", e))
        })?;

        tracing::debug!(key, value, path = %path.display(), "appended step output");
        Ok(())
    }
}
