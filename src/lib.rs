//! arraygen: generate a JavaScript array declaration from raw values.
//!
//! Raw text is parsed as JSON, a literal-only JavaScript expression, or a
//! comma-separated list, rendered as an array literal and written as a
//! `let`/`const`/`var` declaration. With a field name, the array is merged
//! into an existing object declaration instead.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, generate, generate_at, generate_with};
pub use domain::codegen::{MergeOutcome, MergeTarget, compose, merge, parse_values, serialize};
pub use domain::{
    AppError, DeclKind, ExportStyle, GenerateConfig, MAX_VALUES_LEN, ParseMode, RawInputs,
    Value, ValueType,
};
