use serde::{Deserialize, Serialize};

/// Reflected schema snapshot for a single table.
///
/// Produced transiently per table by introspecting the live database; never
/// persisted or cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Source table name.
    pub table: String,
    /// Columns in ordinal order.
    pub columns: Vec<ColumnMetadata>,
    /// Primary-key column names in constraint key order (not column order).
    pub primary_key: Vec<String>,
}

/// Column metadata reflected from the live schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub ordinal_position: u32,
    pub name: String,
    pub sql_type: SqlType,
    pub is_nullable: bool,
    /// Reflected default expression, verbatim, when the column has one.
    pub default: Option<String>,
    pub is_primary_key: bool,
}

/// Source SQL type descriptor for a column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlType {
    /// Bare type name as reported by the catalog (e.g. `varchar`, `longtext`).
    pub name: String,
    /// Declared character length for string types, when the catalog reports one.
    pub character_max_length: Option<i64>,
}

impl SqlType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            character_max_length: None,
        }
    }

    pub fn with_length(name: impl Into<String>, length: i64) -> Self {
        Self {
            name: name.into(),
            character_max_length: Some(length),
        }
    }
}
