use sqlx::MySqlPool;

use f3_modelgen_core::{Error, Result, TableSchema};

use crate::source::SchemaSource;

mod mapper;
mod queries;

/// Adapter for MySQL databases.
///
/// Reflection runs against the `information_schema` views of the connected
/// database only and never writes.
#[derive(Debug, Clone)]
pub struct MySqlSource {
    pool: MySqlPool,
}

impl MySqlSource {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SchemaSource for MySqlSource {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn reflect_table(&self, table: &str) -> Result<TableSchema> {
        reflect_table(&self.pool, table).await
    }
}

/// Reflect a single table's current schema.
pub async fn reflect_table(pool: &MySqlPool, table: &str) -> Result<TableSchema> {
    if !queries::table_exists(pool, table).await? {
        return Err(Error::SchemaNotFound {
            table: table.to_string(),
        });
    }

    let raw_columns = queries::list_columns(pool, table).await?;
    let primary_key = queries::primary_key_columns(pool, table).await?;

    Ok(mapper::map_table(table, raw_columns, primary_key))
}
