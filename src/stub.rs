//! TypeScript declaration stubs derived from a parsed config's shape

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use toml::{Table, Value};

use crate::config::ConfigError;

/// Declaration file written by [`generate_config_types`]
pub const DEFAULT_TYPES_PATH: &str = "replit.d.ts";

const INDENT: &str = "  ";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Render the declaration text for `config` without touching the filesystem.
///
/// The output has the form
///
/// ```text
/// declare module <module_name> {
///   interface Config {
///     <field>: <type>;
///   }
/// }
/// ```
///
/// `module_name` is inserted verbatim; it is not checked for being a valid
/// TypeScript module name.
pub fn render_config_types(config: &Table, module_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "declare module {module_name} {{");
    let _ = writeln!(out, "{INDENT}interface Config {}", render_table(config, 1));
    out.push_str("}\n");
    out
}

/// Render the declaration for `config`, write it to `path` and return it.
///
/// Any existing file at `path` is overwritten.
pub fn generate_config_types_to(
    config: &Table,
    module_name: &str,
    path: &Path,
) -> Result<String, ConfigError> {
    let types = render_config_types(config, module_name);
    fs::write(path, &types)?;
    Ok(types)
}

/// Render the declaration for `config` and write it to `replit.d.ts` in the
/// current directory.
pub fn generate_config_types(config: &Table, module_name: &str) -> Result<String, ConfigError> {
    generate_config_types_to(config, module_name, Path::new(DEFAULT_TYPES_PATH))
}

/// Object type for a table whose closing brace sits at `depth` indents.
fn render_table(table: &Table, depth: usize) -> String {
    if table.is_empty() {
        return "{}".to_string();
    }

    let field_indent = INDENT.repeat(depth + 1);
    let mut out = String::from("{\n");
    for (key, value) in table {
        let _ = writeln!(
            out,
            "{field_indent}{}: {};",
            render_key(key),
            render_type(value, depth + 1)
        );
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
    out
}

fn render_type(value: &Value, depth: usize) -> String {
    match value {
        Value::String(_) | Value::Datetime(_) => "string".to_string(),
        Value::Integer(_) | Value::Float(_) => "number".to_string(),
        Value::Boolean(_) => "boolean".to_string(),
        Value::Array(items) => render_array(items, depth),
        Value::Table(table) => render_table(table, depth),
    }
}

/// Element types are deduplicated in first-seen order.
fn render_array(items: &[Value], depth: usize) -> String {
    let mut element_types: Vec<String> = Vec::new();
    for item in items {
        let ty = render_type(item, depth);
        if !element_types.contains(&ty) {
            element_types.push(ty);
        }
    }

    match element_types.as_slice() {
        [] => "unknown[]".to_string(),
        [single] => format!("{single}[]"),
        many => format!("({})[]", many.join(" | ")),
    }
}

fn render_key(key: &str) -> String {
    if IDENTIFIER.is_match(key) {
        return key.to_string();
    }

    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('"');
    for ch in key.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
