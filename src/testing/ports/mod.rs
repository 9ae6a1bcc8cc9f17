mod recording_step_output;
mod test_files;
mod test_source_store;

pub use self::recording_step_output::RecordingStepOutput;
pub use self::test_files::TestFiles;
pub use self::test_source_store::MockSourceStore;
