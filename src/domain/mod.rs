pub mod codegen;
pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod value;

pub use configuration::{
    DeclKind, ExportStyle, GenerateConfig, MAX_VALUES_LEN, ParseMode, RawInputs, ValueType,
};
pub use error::AppError;
pub use value::Value;
