use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Declaration keyword for the generated binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclKind {
    #[default]
    Let,
    Const,
    Var,
}

impl DeclKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Let => "let",
            DeclKind::Const => "const",
            DeclKind::Var => "var",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for DeclKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "let" => Ok(DeclKind::Let),
            "const" => Ok(DeclKind::Const),
            "var" => Ok(DeclKind::Var),
            _ => Err(AppError::config_error(format!("Invalid decl-kind: {s}"))),
        }
    }
}

/// Statement appended after the declaration to expose the binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStyle {
    #[default]
    None,
    Named,
    Default,
    CommonJs,
}

impl ExportStyle {
    /// The exposure statement for `name`, or `None` when nothing is appended.
    pub fn statement(self, name: &str) -> Option<String> {
        match self {
            ExportStyle::None => None,
            ExportStyle::Named => Some(format!("export {{ {name} }};\n")),
            ExportStyle::Default => Some(format!("export default {name};\n")),
            ExportStyle::CommonJs => Some(format!("module.exports = {name};\n")),
        }
    }
}

impl FromStr for ExportStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ExportStyle::None),
            "named" => Ok(ExportStyle::Named),
            "default" => Ok(ExportStyle::Default),
            "commonjs" => Ok(ExportStyle::CommonJs),
            _ => Err(AppError::config_error(format!(
                "Invalid export-style: {s}. Expected one of none, named, default, commonjs"
            ))),
        }
    }
}

/// How the raw value text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// A single array expression, decoded per [`ParseMode`].
    #[default]
    Stringified,
    /// Comma-separated items, each quoted as a string.
    String,
    /// Comma-separated literal tokens, emitted unchanged.
    Literal,
}

impl FromStr for ValueType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stringified" => Ok(ValueType::Stringified),
            "string" => Ok(ValueType::String),
            "number" | "boolean" => Ok(ValueType::Literal),
            _ => Err(AppError::config_error(format!(
                "Invalid value-type: {s}. Expected one of stringified, string, number, boolean"
            ))),
        }
    }
}

/// Decoder used for stringified values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Strict JSON.
    #[default]
    Json,
    /// Restricted JavaScript literal expressions.
    Js,
}

impl FromStr for ParseMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ParseMode::Json),
            "js" => Ok(ParseMode::Js),
            _ => Err(AppError::config_error(format!("Unknown parse-mode: {s}"))),
        }
    }
}
