//! Array-literal rendering of [`Value`]s.

use crate::domain::{AppError, Value};

const INDENT: &str = "  ";

/// Render `value` as JavaScript literal source.
///
/// Compact output separates elements with `", "`. Pretty output places each
/// element on its own line, indented two spaces per nesting level.
pub fn serialize(value: &Value, pretty: bool) -> Result<String, AppError> {
    let mut out = String::new();
    write_value(&mut out, value, 0, pretty)?;
    Ok(out)
}

fn write_value(
    out: &mut String,
    value: &Value,
    depth: usize,
    pretty: bool,
) -> Result<(), AppError> {
    match value {
        Value::Array(items) => write_array(out, items, depth, pretty)?,
        Value::String(s) => out.push_str(&quote(s)?),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Undefined => out.push_str("undefined"),
        Value::Verbatim(token) => out.push_str(token),
        Value::Object(_) => {
            return Err(AppError::UnsupportedType { type_name: value.type_name().to_string() });
        }
    }
    Ok(())
}

fn write_array(
    out: &mut String,
    items: &[Value],
    depth: usize,
    pretty: bool,
) -> Result<(), AppError> {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            if !pretty {
                out.push(' ');
            }
        }
        if pretty {
            out.push('\n');
            out.push_str(&INDENT.repeat(depth + 1));
        }
        write_value(out, item, depth + 1, pretty)?;
    }
    if pretty {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth));
    }
    out.push(']');
    Ok(())
}

/// Quote a string the way `JSON.stringify` does.
pub fn quote(s: &str) -> Result<String, AppError> {
    serde_json::to_string(s).map_err(|e| AppError::Internal(format!("Failed to quote string: {e}")))
}

/// Format a number the way JavaScript's `String(n)` does.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits in scientific form.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let e = point - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    };

    if n < 0.0 { format!("-{body}") } else { body }
}
