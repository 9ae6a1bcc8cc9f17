//! Shared testing harness for `arraygen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Step input variables the binary reads; cleared so the host environment
/// cannot leak into a test run.
const STEP_INPUTS: &[&str] = &[
    "INPUT_JS-NAME",
    "INPUT_ARRAY-NAME",
    "INPUT_VALUES",
    "INPUT_VALUE-TYPE",
    "INPUT_PARSE-MODE",
    "INPUT_DECL-KIND",
    "INPUT_EXPORT-STYLE",
    "INPUT_PRETTY",
    "INPUT_OVERWRITE",
    "INPUT_DRY-RUN",
    "INPUT_FIELD",
];

/// Testing harness providing an isolated working directory and step output
/// file for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    output_file: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let output_file = root.path().join("github_output");
        fs::write(&output_file, "").expect("Failed to create step output file");

        Self { root, work_dir, output_file }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `arraygen` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("arraygen").expect("Failed to locate arraygen binary");
        cmd.current_dir(&self.work_dir);
        for name in STEP_INPUTS {
            cmd.env_remove(name);
        }
        cmd.env_remove("ARRAYGEN_LOG").env_remove("RUST_LOG");
        cmd.env("GITHUB_OUTPUT", &self.output_file);
        cmd
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_file(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write test file");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path)).expect("Failed to read test file")
    }

    pub(crate) fn file_exists(&self, path: &str) -> bool {
        self.work_dir.join(path).exists()
    }

    /// Everything appended to the step output file so far.
    pub(crate) fn step_output(&self) -> String {
        fs::read_to_string(&self.output_file).expect("Failed to read step output file")
    }
}
