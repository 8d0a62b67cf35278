use thiserror::Error;

/// Core error type shared across the model generator crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The database could not be reached; nothing can proceed.
    #[error("database connection error: {0}")]
    Connection(String),
    /// A query failed on an established session.
    #[error("database error: {0}")]
    Db(String),
    /// The named table does not exist in the connected database.
    #[error("table not found: {table}")]
    SchemaNotFound { table: String },
    /// A column uses a SQL type the mapping table does not cover.
    #[error("unsupported sql type `{sql_type}` for column `{column}`")]
    UnsupportedType { column: String, sql_type: String },
    /// Template rendering failed.
    #[error("template render error: {0}")]
    Render(String),
    /// Filesystem failure while writing generated output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The environment configuration is missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias for results returned by the generator crates.
pub type Result<T> = std::result::Result<T, Error>;
