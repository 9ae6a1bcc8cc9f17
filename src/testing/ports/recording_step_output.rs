//! Test double for `StepOutput`.

use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::StepOutput;

/// Records appended step output instead of writing it anywhere.
#[derive(Clone, Debug, Default)]
pub struct RecordingStepOutput {
    records: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingStepOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl StepOutput for RecordingStepOutput {
    fn append(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.records.lock().unwrap().push((key.to_string(), value.to_string()));
        Ok(())
    }
}
