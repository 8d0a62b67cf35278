use sqlx::MySqlPool;

use f3_modelgen_core::{Error, Result};

/// Raw column row from `information_schema.columns`.
///
/// Runtime-checked queries rather than compile-time `query!` macros: the
/// generator points at customer databases, so no schema is available at build
/// time.
#[derive(Debug, sqlx::FromRow)]
pub struct RawColumn {
    pub ordinal_position: i64,
    pub name: String,
    pub data_type: String,
    pub is_nullable: String,
    pub column_default: Option<String>,
    pub character_max_length: Option<i64>,
}

pub async fn table_exists(pool: &MySqlPool, table: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        r#"
        select count(*)
        from information_schema.tables
        where table_schema = database()
          and table_name = ?
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .map_err(|err| Error::Db(err.to_string()))?;

    Ok(count > 0)
}

pub async fn list_columns(pool: &MySqlPool, table: &str) -> Result<Vec<RawColumn>> {
    sqlx::query_as::<_, RawColumn>(
        r#"
        select
          cast(ordinal_position as signed) as ordinal_position,
          column_name as name,
          data_type as data_type,
          is_nullable as is_nullable,
          cast(column_default as char) as column_default,
          cast(character_maximum_length as signed) as character_max_length
        from information_schema.columns
        where table_schema = database()
          and table_name = ?
        order by ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}

/// Primary-key column names in constraint key order.
pub async fn primary_key_columns(pool: &MySqlPool, table: &str) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select column_name
        from information_schema.key_column_usage
        where table_schema = database()
          and table_name = ?
          and constraint_name = 'PRIMARY'
        order by ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}
