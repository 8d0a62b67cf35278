//! Live-schema reflection adapters.

pub mod mysql;
pub mod source;

pub use mysql::{reflect_table, MySqlSource};
pub use source::SchemaSource;

pub use f3_modelgen_core::TableSchema;
