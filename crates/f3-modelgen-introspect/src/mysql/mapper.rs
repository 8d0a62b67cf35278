use f3_modelgen_core::{ColumnMetadata, SqlType, TableSchema};

use super::queries::RawColumn;

pub fn map_table(table: &str, raw_columns: Vec<RawColumn>, primary_key: Vec<String>) -> TableSchema {
    let columns = raw_columns
        .into_iter()
        .map(|col| map_column(col, &primary_key))
        .collect();

    TableSchema {
        table: table.to_string(),
        columns,
        primary_key,
    }
}

fn map_column(raw: RawColumn, primary_key: &[String]) -> ColumnMetadata {
    let is_primary_key = primary_key.iter().any(|name| name == &raw.name);

    ColumnMetadata {
        ordinal_position: u32::try_from(raw.ordinal_position).unwrap_or_default(),
        name: raw.name,
        sql_type: SqlType {
            name: raw.data_type,
            character_max_length: raw.character_max_length,
        },
        is_nullable: raw.is_nullable.eq_ignore_ascii_case("YES"),
        default: raw.column_default,
        is_primary_key,
    }
}
