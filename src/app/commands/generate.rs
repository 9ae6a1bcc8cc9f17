//! The `generate` command: parse, render and write one declaration.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::codegen::{
    MergeOutcome, MergeTarget, append_export, compose, compose_field_declaration, merge,
    parse_values, serialize,
};
use crate::domain::{AppError, GenerateConfig};
use crate::ports::{SourceStore, StepOutput};

/// Step output key carrying the target path.
pub const FILE_OUTPUT_KEY: &str = "file";

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    /// Target path, as configured.
    pub path: String,
    /// Name the export statement refers to.
    pub name: String,
    /// Full file content that was (or, in dry-run, would be) written.
    pub content: String,
    pub written: bool,
    /// Which declaration was patched, when an existing object was merged.
    pub merge: Option<MergeTarget>,
}

/// Execute the generate command.
pub fn execute<S, O>(
    ctx: &AppContext<S, O>,
    config: &GenerateConfig,
) -> Result<GenerateOutcome, AppError>
where
    S: SourceStore,
    O: StepOutput,
{
    let existing = if ctx.store().exists(&config.target) {
        if !config.overwrite && !config.dry_run {
            return Err(AppError::Conflict(config.target.clone()));
        }
        Some(ctx.store().read(&config.target)?)
    } else {
        None
    };

    let value = parse_values(&config.values, config.value_type, config.parse_mode)?;
    let literal = serialize(&value, config.pretty)?;

    let (content, name, merge_target) = match (&config.field, existing.as_deref()) {
        (Some(field), Some(existing)) => match merge(existing, &config.name, field, &literal)? {
            MergeOutcome::Patched { mut content, bound_name, target } => {
                append_export_once(&mut content, config, &bound_name);
                (content, bound_name, Some(target))
            }
            MergeOutcome::NoTarget => {
                tracing::debug!(path = %config.target, "no object declaration to merge into");
                let mut content =
                    compose_field_declaration(config.decl_kind, &config.name, field, &literal);
                append_export(&mut content, config.export_style, &config.name);
                (content, config.name.clone(), None)
            }
        },
        _ => (compose(config, &literal), config.name.clone(), None),
    };

    tracing::info!(path = %config.target, merge = ?merge_target, "generated declaration");
    println!("Generated output:\n\n{content}");

    let written = !config.dry_run;
    if written {
        ctx.store().write(&config.target, &content)?;
    } else {
        tracing::info!(path = %config.target, "dry run; file left untouched");
    }

    ctx.output().append(FILE_OUTPUT_KEY, &config.target)?;

    Ok(GenerateOutcome { path: config.target.clone(), name, content, written, merge: merge_target })
}

/// Add the export statement unless a line of the patched file already starts
/// with it.
fn append_export_once(content: &mut String, config: &GenerateConfig, name: &str) {
    let Some(statement) = config.export_style.statement(name) else {
        return;
    };
    let exported = statement.trim_end();
    if content.lines().any(|line| line.trim_start().starts_with(exported)) {
        return;
    }
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&statement);
}
