//! API Facade for the application.
//!
//! Glues context creation to command execution for library callers and the
//! CLI.

use std::path::PathBuf;

use crate::adapters::{FilesystemStore, GithubOutput};
use crate::app::{AppContext, commands::generate};
use crate::domain::{AppError, GenerateConfig};

pub use crate::app::commands::generate::GenerateOutcome;

/// Generate relative to the current directory, reporting to `GITHUB_OUTPUT`.
pub fn generate(config: &GenerateConfig) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, config)
}

/// Generate relative to `root`, reporting to `GITHUB_OUTPUT`.
pub fn generate_at(
    root: impl Into<PathBuf>,
    config: &GenerateConfig,
) -> Result<GenerateOutcome, AppError> {
    generate_with(root, GithubOutput::from_env(), config)
}

/// Generate relative to `root` with an explicit step output channel.
pub fn generate_with(
    root: impl Into<PathBuf>,
    output: GithubOutput,
    config: &GenerateConfig,
) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(FilesystemStore::new(root.into()), output);
    generate::execute(&ctx, config)
}
