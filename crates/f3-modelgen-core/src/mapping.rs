use crate::error::{Error, Result};
use crate::schema::ColumnMetadata;

/// Fallback string length when the catalog does not report one.
const DEFAULT_STRING_LENGTH: i64 = 45;

/// Python value type used by generated code to hold a column's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyType {
    Str,
    Int,
    Bool,
    Date,
    DateTime,
    Json,
}

impl PyType {
    /// Type annotation as it appears in generated source.
    pub fn annotation(self) -> &'static str {
        match self {
            PyType::Str => "str",
            PyType::Int => "int",
            PyType::Bool => "bool",
            PyType::Date => "date",
            PyType::DateTime => "datetime",
            PyType::Json => "dict[str, Any]",
        }
    }
}

/// Result of mapping a source SQL type: the SQLAlchemy column type expression
/// and the Python runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub sa_type: String,
    pub py_type: PyType,
}

/// Map a reflected column to its target types.
///
/// Pure lookup over a static table; the SQL type name is matched
/// case-insensitively. Types outside the table fail with
/// [`Error::UnsupportedType`] naming the column and the offending type.
pub fn map_column(column: &ColumnMetadata) -> Result<MappedType> {
    let name = column.sql_type.name.to_ascii_lowercase();
    let length = column
        .sql_type
        .character_max_length
        .unwrap_or(DEFAULT_STRING_LENGTH);

    let mapped = match name.as_str() {
        "varchar" | "char" => MappedType {
            sa_type: format!("sa.String({length})"),
            py_type: PyType::Str,
        },
        "text" => MappedType {
            sa_type: "sa.Text".to_string(),
            py_type: PyType::Str,
        },
        "longtext" => MappedType {
            sa_type: "LONGTEXT".to_string(),
            py_type: PyType::Str,
        },
        // MySQL tinyint is conventionally a boolean in this schema.
        "tinyint" | "boolean" | "bool" => MappedType {
            sa_type: "sa.Boolean".to_string(),
            py_type: PyType::Bool,
        },
        "smallint" => MappedType {
            sa_type: "sa.SmallInteger".to_string(),
            py_type: PyType::Int,
        },
        "int" | "integer" => MappedType {
            sa_type: "sa.Integer".to_string(),
            py_type: PyType::Int,
        },
        "bigint" => MappedType {
            sa_type: "sa.BigInteger".to_string(),
            py_type: PyType::Int,
        },
        "date" => MappedType {
            sa_type: "sa.Date".to_string(),
            py_type: PyType::Date,
        },
        "datetime" | "timestamp" => MappedType {
            sa_type: "sa.DateTime".to_string(),
            py_type: PyType::DateTime,
        },
        "json" => MappedType {
            sa_type: "sa.JSON".to_string(),
            py_type: PyType::Json,
        },
        _ => {
            return Err(Error::UnsupportedType {
                column: column.name.clone(),
                sql_type: column.sql_type.name.clone(),
            })
        }
    };

    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SqlType;

    fn column(sql_type: SqlType) -> ColumnMetadata {
        ColumnMetadata {
            ordinal_position: 1,
            name: "sample".to_string(),
            sql_type,
            is_nullable: true,
            default: None,
            is_primary_key: false,
        }
    }

    #[test]
    fn maps_varchar_with_reflected_length() {
        let mapped = map_column(&column(SqlType::with_length("varchar", 100))).unwrap();
        assert_eq!(mapped.sa_type, "sa.String(100)");
        assert_eq!(mapped.py_type, PyType::Str);
    }

    #[test]
    fn varchar_without_length_falls_back_to_45() {
        let mapped = map_column(&column(SqlType::new("varchar"))).unwrap();
        assert_eq!(mapped.sa_type, "sa.String(45)");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mapped = map_column(&column(SqlType::new("LONGTEXT"))).unwrap();
        assert_eq!(mapped.sa_type, "LONGTEXT");
        assert_eq!(mapped.py_type, PyType::Str);
    }

    #[test]
    fn maps_supported_scalar_types() {
        let cases = [
            ("int", "sa.Integer", PyType::Int),
            ("integer", "sa.Integer", PyType::Int),
            ("bigint", "sa.BigInteger", PyType::Int),
            ("smallint", "sa.SmallInteger", PyType::Int),
            ("tinyint", "sa.Boolean", PyType::Bool),
            ("text", "sa.Text", PyType::Str),
            ("date", "sa.Date", PyType::Date),
            ("datetime", "sa.DateTime", PyType::DateTime),
            ("timestamp", "sa.DateTime", PyType::DateTime),
            ("json", "sa.JSON", PyType::Json),
        ];

        for (sql, sa, py) in cases {
            let mapped = map_column(&column(SqlType::new(sql))).unwrap();
            assert_eq!(mapped.sa_type, sa, "sql type {sql}");
            assert_eq!(mapped.py_type, py, "sql type {sql}");
        }
    }

    #[test]
    fn unsupported_type_names_column_and_type() {
        let mut col = column(SqlType::new("geometry"));
        col.name = "location".to_string();

        let err = map_column(&col).unwrap_err();
        match err {
            Error::UnsupportedType { column, sql_type } => {
                assert_eq!(column, "location");
                assert_eq!(sql_type, "geometry");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
