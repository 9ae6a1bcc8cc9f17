use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::domain::AppError;

/// Words that cannot be bound by a declaration.
///
/// ECMAScript reserved words, strict-mode reserved words, and the
/// non-writable globals.
static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
        "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
        "yield", "let", "static", "implements", "interface", "package", "private", "protected",
        "public", "arguments", "eval", "undefined", "NaN", "Infinity",
    ]
    .into_iter()
    .collect()
});

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

/// Checks identifier syntax: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Validates a name used as a binding or object key.
///
/// `role` names the option in error messages (e.g. `array-name`).
pub fn validate_identifier(name: &str, role: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::config_error(format!("Invalid {role}: must not be empty")));
    }
    if is_reserved_word(name) {
        return Err(AppError::config_error(format!(
            "Invalid {role}: reserved keyword ({name})"
        )));
    }
    if !is_identifier(name) {
        return Err(AppError::config_error(format!(
            "Invalid {role}: '{name}' is not a valid identifier"
        )));
    }
    Ok(())
}

/// Derive a binding name from a file path.
///
/// Strips the extension, replaces every non-word character with `_`, and
/// prefixes a leading digit with `_`.
pub fn derive_name_from_path(path: &str) -> String {
    let stem = Path::new(path).file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();

    let mut name: String =
        stem.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
