pub mod ports;

pub use ports::{MockSourceStore, RecordingStepOutput, TestFiles};
