pub mod filesystem;
pub mod github_output;

pub use filesystem::FilesystemStore;
pub use github_output::GithubOutput;
