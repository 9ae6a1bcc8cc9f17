//! Run configuration domain models.

pub mod generate_config;
pub mod options;

pub use generate_config::{GenerateConfig, MAX_VALUES_LEN, RawInputs};
pub use options::{DeclKind, ExportStyle, ParseMode, ValueType};
