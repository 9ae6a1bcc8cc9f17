//! Resolution of raw step inputs into a validated run configuration.

use crate::domain::AppError;
use crate::domain::identifiers::{derive_name_from_path, validate_identifier};

use super::options::{DeclKind, ExportStyle, ParseMode, ValueType};

/// Upper bound on the raw value text, in bytes.
pub const MAX_VALUES_LEN: usize = 100_000;

/// Unvalidated inputs as supplied by flags or step environment variables.
///
/// Empty or whitespace-only optional inputs are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub js_name: String,
    pub array_name: Option<String>,
    pub values: String,
    pub value_type: Option<String>,
    pub parse_mode: Option<String>,
    pub decl_kind: Option<String>,
    pub export_style: Option<String>,
    pub pretty: Option<String>,
    pub overwrite: Option<String>,
    pub dry_run: Option<String>,
    pub field: Option<String>,
}

/// Validated configuration for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Target file, as given; also reported verbatim.
    pub target: String,
    /// Binding name of the generated declaration.
    pub name: String,
    pub values: String,
    pub value_type: ValueType,
    pub parse_mode: ParseMode,
    pub decl_kind: DeclKind,
    pub export_style: ExportStyle,
    pub pretty: bool,
    pub overwrite: bool,
    pub dry_run: bool,
    /// When set, the array becomes this field of an object declaration.
    pub field: Option<String>,
}

impl GenerateConfig {
    /// Validate raw inputs. Performs no I/O.
    pub fn resolve(raw: RawInputs) -> Result<Self, AppError> {
        if raw.values.len() > MAX_VALUES_LEN {
            return Err(AppError::config_error(format!(
                "values input too large ({} bytes, limit {MAX_VALUES_LEN})",
                raw.values.len()
            )));
        }

        let target = raw.js_name.trim().to_string();
        if target.is_empty() {
            return Err(AppError::config_error("js-name must not be empty"));
        }
        if target.chars().any(char::is_control) {
            return Err(AppError::config_error("js-name must not contain control characters"));
        }

        let name = match present(raw.array_name.as_deref()) {
            Some(name) => name.to_string(),
            None => derive_name_from_path(&target),
        };
        validate_identifier(&name, "array-name")?;

        let decl_kind = parse_or_default::<DeclKind>(raw.decl_kind.as_deref())?;
        let export_style = parse_or_default::<ExportStyle>(raw.export_style.as_deref())?;
        let value_type = parse_or_default::<ValueType>(raw.value_type.as_deref())?;
        // Only stringified values are decoded; list types ignore the mode.
        let parse_mode = match value_type {
            ValueType::Stringified => parse_or_default::<ParseMode>(raw.parse_mode.as_deref())?,
            _ => ParseMode::default(),
        };

        let field = present(raw.field.as_deref()).map(str::to_string);
        if let Some(field) = &field {
            validate_identifier(field, "field")?;
        }

        Ok(Self {
            target,
            name,
            values: raw.values,
            value_type,
            parse_mode,
            decl_kind,
            export_style,
            pretty: is_true(raw.pretty.as_deref()),
            overwrite: !is_false(raw.overwrite.as_deref()),
            dry_run: is_true(raw.dry_run.as_deref()),
            field,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, AppError>
where
    T: std::str::FromStr<Err = AppError> + Default,
{
    present(value).map(str::parse::<T>).transpose().map(Option::unwrap_or_default)
}

fn is_true(value: Option<&str>) -> bool {
    present(value).is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn is_false(value: Option<&str>) -> bool {
    present(value).is_some_and(|v| v.eq_ignore_ascii_case("false"))
}
