//! Machine-readable step output channel.

use crate::domain::AppError;

/// Port for reporting `key=value` records to the automation runner.
pub trait StepOutput {
    /// Append one record. `value` must be a single line.
    fn append(&self, key: &str, value: &str) -> Result<(), AppError>;
}
