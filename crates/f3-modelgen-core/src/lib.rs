//! Core contracts and helpers for the F3 Nation model generator.
//!
//! This crate defines the reflected-schema types, the SQL-to-Python type
//! mapping, configuration loading, and the error taxonomy shared across the
//! introspection, rendering, and CLI crates.

pub mod config;
pub mod error;
pub mod mapping;
pub mod schema;

pub use config::{default_targets, DbConfig, TableSpec};
pub use error::{Error, Result};
pub use mapping::{map_column, MappedType, PyType};
pub use schema::{ColumnMetadata, SqlType, TableSchema};

/// Name stamped into the header of every generated file.
pub const TOOL_NAME: &str = "f3-modelgen";
