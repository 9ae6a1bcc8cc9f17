//! Raw value text to [`Value`].

use crate::domain::configuration::{ParseMode, ValueType};
use crate::domain::{AppError, Value};

use super::expression;

/// Parse raw value text according to the value type and parse mode.
///
/// List value types split on every comma without regard to quoting, so
/// `"a,b"` becomes two items.
pub fn parse_values(raw: &str, value_type: ValueType, mode: ParseMode) -> Result<Value, AppError> {
    match value_type {
        ValueType::Stringified => parse_stringified(raw, mode),
        ValueType::String => Ok(Value::Array(split_items(raw).map(Value::String).collect())),
        ValueType::Literal => Ok(Value::Array(split_items(raw).map(Value::Verbatim).collect())),
    }
}

fn parse_stringified(raw: &str, mode: ParseMode) -> Result<Value, AppError> {
    match mode {
        ParseMode::Json => serde_json::from_str::<serde_json::Value>(raw)
            .map(Value::from)
            .map_err(|e| AppError::parse_error("values as JSON", e.to_string())),
        ParseMode::Js => expression::evaluate(raw),
    }
}

fn split_items(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').map(|item| item.trim().to_string())
}
