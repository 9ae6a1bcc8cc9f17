//! In-place patching of one field of an existing object declaration.
//!
//! This is a textual patch, not a parse/print round trip. Declaration heads
//! (`<name> = {`) are located with regular expressions; the object body is
//! then walked token by token (see [`super::scanner`]) to find its closing
//! brace, its top-level keys and the extent of a field's value. Everything
//! outside the replaced range is returned byte-for-byte.
//!
//! Known limitations: heads inside comments or strings are still matched,
//! regex literals inside the object are not understood, and computed or
//! shorthand keys are never recognised as the target field.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::AppError;

use super::scanner::{Lexeme, Token, lexemes, matching_close};

/// First `let|const|var <ident> = {` in the file.
static ANY_OBJECT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w$.])(?:let|const|var)\s+([A-Za-z_$][\w$]*)\s*=\s*\{")
        .expect("object declaration pattern is valid")
});

/// Which declaration a merge patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeTarget {
    /// The object bound to the configured name.
    Exact,
    /// The first object declaration in the file, bound to another name.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Patched { content: String, bound_name: String, target: MergeTarget },
    /// No object declaration to patch; the caller composes a new one.
    NoTarget,
}

/// Set `field` to `literal` in the object declaration bound to `name`,
/// falling back to the first object declaration in `existing`.
pub fn merge(
    existing: &str,
    name: &str,
    field: &str,
    literal: &str,
) -> Result<MergeOutcome, AppError> {
    let exact = Regex::new(&format!(r"(?:^|[^\w$.])({})\s*=\s*\{{", regex::escape(name)))
        .map_err(|e| AppError::Internal(format!("Invalid declaration pattern for '{name}': {e}")))?;

    let (span, target) = match find_object(&exact, existing) {
        Some(span) => (span, MergeTarget::Exact),
        None => match find_object(&ANY_OBJECT_DECL, existing) {
            Some(span) => (span, MergeTarget::Fallback),
            None => return Ok(MergeOutcome::NoTarget),
        },
    };

    let body_start = span.open + 1;
    let edit = field_edit(&existing[body_start..span.close], field, literal);

    let mut content = String::with_capacity(existing.len() + edit.text.len());
    content.push_str(&existing[..body_start + edit.start]);
    content.push_str(&edit.text);
    content.push_str(&existing[body_start + edit.end..]);

    Ok(MergeOutcome::Patched { content, bound_name: span.name, target })
}

struct ObjectSpan {
    name: String,
    open: usize,
    close: usize,
}

/// First match of `pattern` whose `{` has a matching `}`.
///
/// `pattern` must end at the opening brace and capture the bound name as
/// group 1.
fn find_object(pattern: &Regex, src: &str) -> Option<ObjectSpan> {
    pattern.captures_iter(src).find_map(|caps| {
        let open = caps.get(0)?.end() - 1;
        let close = matching_close(src, open)?;
        Some(ObjectSpan { name: caps.get(1)?.as_str().to_string(), open, close })
    })
}

/// Replacement of `body[start..end]` with `text`.
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

fn field_edit(body: &str, field: &str, literal: &str) -> Edit {
    let top: Vec<Lexeme> = lexemes(body).filter(|lx| lx.depth == 0).collect();

    if let Some(colon) = find_key(body, &top, field) {
        let value: Vec<&Lexeme> =
            top[colon + 1..].iter().take_while(|lx| lx.token != Token::Comma).collect();
        return match (value.first(), value.last()) {
            (Some(first), Some(last)) => {
                Edit { start: first.start, end: last.end, text: literal.to_string() }
            }
            _ => {
                let at = top[colon].end;
                Edit { start: at, end: at, text: format!(" {literal}") }
            }
        };
    }

    match top.last() {
        None if body.trim().is_empty() => {
            Edit { start: 0, end: body.len(), text: format!(" {field}: {literal} ") }
        }
        None => Edit { start: 0, end: 0, text: format!(" {field}: {literal},") },
        Some(last) if last.token == Token::Comma => {
            Edit { start: last.end, end: last.end, text: format!(" {field}: {literal}") }
        }
        Some(last) => {
            Edit { start: last.end, end: last.end, text: format!(", {field}: {literal}") }
        }
    }
}

/// Index in `top` of the colon following the top-level key `field`.
fn find_key(body: &str, top: &[Lexeme], field: &str) -> Option<usize> {
    let mut at_key = true;
    for (i, lx) in top.iter().enumerate() {
        let colon_follows = top.get(i + 1).is_some_and(|next| next.token == Token::Colon);
        if at_key && colon_follows && key_text(body, lx) == Some(field) {
            return Some(i + 1);
        }
        at_key = lx.token == Token::Comma;
    }
    None
}

fn key_text<'a>(body: &'a str, lx: &Lexeme) -> Option<&'a str> {
    let text = &body[lx.start..lx.end];
    match lx.token {
        Token::Word => Some(text),
        Token::Str if text.len() >= 2 && !text.starts_with('`') => Some(&text[1..text.len() - 1]),
        _ => None,
    }
}
