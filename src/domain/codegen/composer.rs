//! Declaration statements around a rendered literal.

use crate::domain::configuration::{DeclKind, ExportStyle, GenerateConfig};

/// `<kind> <name> = <literal>;`
pub fn compose_declaration(kind: DeclKind, name: &str, literal: &str) -> String {
    format!("{kind} {name} = {literal};\n")
}

/// `<kind> <name> = { <field>: <literal> };`
pub fn compose_field_declaration(kind: DeclKind, name: &str, field: &str, literal: &str) -> String {
    format!("{kind} {name} = {{ {field}: {literal} }};\n")
}

/// Append the exposure statement for `name`, if the style has one.
pub fn append_export(content: &mut String, style: ExportStyle, name: &str) {
    if let Some(statement) = style.statement(name) {
        content.push_str(&statement);
    }
}

/// Fresh file content for `config`: the declaration plus its export.
pub fn compose(config: &GenerateConfig, literal: &str) -> String {
    let mut content = match &config.field {
        Some(field) => compose_field_declaration(config.decl_kind, &config.name, field, literal),
        None => compose_declaration(config.decl_kind, &config.name, literal),
    };
    append_export(&mut content, config.export_style, &config.name);
    content
}
