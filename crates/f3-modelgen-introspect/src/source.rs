use async_trait::async_trait;

use f3_modelgen_core::{Result, TableSchema};

/// Trait implemented by adapters that can reflect a table's current schema.
#[async_trait]
pub trait SchemaSource {
    /// Returns the engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// Reflect the named table and return its schema snapshot.
    ///
    /// Read-only: adapters must not write to the source database. Fails with
    /// [`f3_modelgen_core::Error::SchemaNotFound`] when the table does not
    /// exist.
    async fn reflect_table(&self, table: &str) -> Result<TableSchema>;
}
