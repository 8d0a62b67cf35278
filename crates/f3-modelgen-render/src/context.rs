use serde::Serialize;

use f3_modelgen_core::{map_column, ColumnMetadata, PyType, Result, TableSchema, TableSpec};

/// Fully prepared template input for one model file.
///
/// All decisions (import pruning, argument assembly, repr shape) are made
/// here so the template itself stays declarative.
#[derive(Debug, Clone, Serialize)]
pub struct ModelContext {
    pub tool_name: String,
    pub table_name: String,
    pub class_name: String,
    pub timestamp: String,
    /// Conditional stdlib import lines, already ordered.
    pub std_imports: Vec<String>,
    pub needs_longtext: bool,
    pub fields: Vec<FieldContext>,
    /// Explicit composite-key constraint expression, when the key spans
    /// multiple columns.
    pub table_args: Option<String>,
    pub repr_format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    pub name: String,
    pub annotation: String,
    pub arguments: String,
}

/// Assemble the render context for a table.
///
/// The timestamp is caller-supplied so rendering stays deterministic under
/// test. Fails with `UnsupportedType` when any column's SQL type is outside
/// the mapping table.
pub fn build_context(
    spec: &TableSpec,
    schema: &TableSchema,
    timestamp: &str,
) -> Result<ModelContext> {
    let mut needs_date = false;
    let mut needs_datetime = false;
    let mut needs_any = false;
    let mut needs_longtext = false;
    let mut fields = Vec::with_capacity(schema.columns.len());

    for column in &schema.columns {
        let mapped = map_column(column)?;

        match mapped.py_type {
            PyType::Date => needs_date = true,
            PyType::DateTime => needs_datetime = true,
            PyType::Json => needs_any = true,
            _ => {}
        }
        if mapped.sa_type == "LONGTEXT" {
            needs_longtext = true;
        }

        fields.push(build_field(column, mapped.py_type, mapped.sa_type));
    }

    let mut std_imports = Vec::new();
    match (needs_date, needs_datetime) {
        (true, true) => std_imports.push("from datetime import date, datetime".to_string()),
        (true, false) => std_imports.push("from datetime import date".to_string()),
        (false, true) => std_imports.push("from datetime import datetime".to_string()),
        (false, false) => {}
    }
    if needs_any {
        std_imports.push("from typing import Any".to_string());
    }

    let table_args = if schema.primary_key.len() > 1 {
        let quoted: Vec<String> = schema
            .primary_key
            .iter()
            .map(|name| format!("'{name}'"))
            .collect();
        Some(format!("sa.PrimaryKeyConstraint({})", quoted.join(", ")))
    } else {
        None
    };

    let repr_format = fields
        .iter()
        .map(|field| format!("{0}={{self.{0}}}", field.name))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(ModelContext {
        tool_name: f3_modelgen_core::TOOL_NAME.to_string(),
        table_name: spec.table.to_string(),
        class_name: spec.class_name.to_string(),
        timestamp: timestamp.to_string(),
        std_imports,
        needs_longtext,
        fields,
        table_args,
        repr_format,
    })
}

fn build_field(column: &ColumnMetadata, py_type: PyType, sa_type: String) -> FieldContext {
    // Key columns are non-nullable regardless of what the catalog says.
    let nullable = column.is_nullable && !column.is_primary_key;

    let annotation = if nullable {
        format!("{} | None", py_type.annotation())
    } else {
        py_type.annotation().to_string()
    };

    let mut arguments = sa_type;
    if column.is_primary_key {
        arguments.push_str(", primary_key=True");
    }
    arguments.push_str(if nullable {
        ", nullable=True"
    } else {
        ", nullable=False"
    });
    if let Some(default) = column.default.as_deref() {
        if let Some(rendered) = format_default(default, py_type) {
            arguments.push_str(&format!(", default={rendered}"));
        }
    }

    FieldContext {
        name: column.name.clone(),
        annotation,
        arguments,
    }
}

/// Render a reflected default expression as a Python literal. A literal
/// `NULL` default carries no information and is dropped.
fn format_default(default: &str, py_type: PyType) -> Option<String> {
    if default.eq_ignore_ascii_case("NULL") {
        return None;
    }

    let rendered = match py_type {
        PyType::Bool => {
            if default == "1" || default.eq_ignore_ascii_case("true") {
                "True".to_string()
            } else {
                "False".to_string()
            }
        }
        PyType::Str => format!("\"{default}\""),
        _ => default.to_string(),
    };

    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_boolean_defaults() {
        assert_eq!(format_default("1", PyType::Bool).as_deref(), Some("True"));
        assert_eq!(format_default("0", PyType::Bool).as_deref(), Some("False"));
        assert_eq!(format_default("true", PyType::Bool).as_deref(), Some("True"));
    }

    #[test]
    fn quotes_string_defaults_and_passes_numbers_through() {
        assert_eq!(
            format_default("active", PyType::Str).as_deref(),
            Some("\"active\"")
        );
        assert_eq!(format_default("42", PyType::Int).as_deref(), Some("42"));
    }

    #[test]
    fn null_default_is_dropped() {
        assert_eq!(format_default("NULL", PyType::Str), None);
    }
}
