//! In-memory value model shared by the parser and the serializer.

/// A parsed input value.
///
/// Only arrays and scalars have an array-literal form. `Object` is produced
/// by permissive parsing of object literals and by strict parsing of JSON
/// objects so the serializer can reject it by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Array(Vec<Value>),
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    /// The absent marker, emitted as `undefined`.
    Undefined,
    Object(Vec<(String, Value)>),
    /// A caller-supplied literal token emitted unchanged.
    Verbatim(String),
}

impl Value {
    /// JavaScript `typeof`-style name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Array(_) | Value::Object(_) | Value::Null => "object",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Undefined => "undefined",
            Value::Verbatim(_) => "literal",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Integers beyond 2^53 lose precision exactly as they would in JSON.parse.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
