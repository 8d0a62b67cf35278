use std::fs;
use std::path::{Path, PathBuf};

use f3_modelgen_core::{Result, TableSpec};
use f3_modelgen_introspect::SchemaSource;
use f3_modelgen_render::ModelRenderer;

/// Per-table results of one generation run.
#[derive(Debug, Default)]
pub struct GenerateOutcome {
    pub generated: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl GenerateOutcome {
    pub fn attempted(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Run the generation pipeline for every target table.
///
/// Tables are processed sequentially in list order. A failure on one table is
/// recorded and logged but never stops the remaining tables; the caller
/// decides overall exit status from the outcome.
pub async fn generate_all<S: SchemaSource>(
    source: &S,
    renderer: &ModelRenderer,
    targets: &[TableSpec],
    out_dir: &Path,
) -> GenerateOutcome {
    let mut outcome = GenerateOutcome::default();

    for spec in targets {
        tracing::info!(event = "model_generation_starting", table = spec.table);

        match generate_table(source, renderer, spec, out_dir).await {
            Ok(path) => {
                tracing::info!(
                    event = "model_generated",
                    table = spec.table,
                    file = %path.display(),
                );
                outcome.generated.push(spec.table);
            }
            Err(err) => {
                tracing::error!(
                    event = "model_generation_failed",
                    table = spec.table,
                    error = %err,
                );
                outcome.failed.push(spec.table);
            }
        }
    }

    outcome
}

async fn generate_table<S: SchemaSource>(
    source: &S,
    renderer: &ModelRenderer,
    spec: &TableSpec,
    out_dir: &Path,
) -> Result<PathBuf> {
    let schema = source.reflect_table(spec.table).await?;
    tracing::info!(
        event = "schema_reflected",
        table = spec.table,
        column_count = schema.columns.len(),
        primary_key = ?schema.primary_key,
    );

    let timestamp = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();
    let rendered = renderer.render(spec, &schema, &timestamp)?;

    let path = out_dir.join(spec.file_name);
    fs::write(&path, rendered)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;

    use f3_modelgen_core::{
        default_targets, ColumnMetadata, Error, SqlType, TableSchema,
    };

    /// In-memory source: reflects from a fixed table map, no database.
    struct FakeSource {
        tables: HashMap<&'static str, TableSchema>,
    }

    #[async_trait]
    impl SchemaSource for FakeSource {
        fn engine(&self) -> &'static str {
            "fake"
        }

        async fn reflect_table(&self, table: &str) -> f3_modelgen_core::Result<TableSchema> {
            self.tables
                .get(table)
                .cloned()
                .ok_or_else(|| Error::SchemaNotFound {
                    table: table.to_string(),
                })
        }
    }

    fn simple_schema(table: &str, pk: &str) -> TableSchema {
        TableSchema {
            table: table.to_string(),
            columns: vec![
                ColumnMetadata {
                    ordinal_position: 1,
                    name: pk.to_string(),
                    sql_type: SqlType::with_length("varchar", 45),
                    is_nullable: false,
                    default: None,
                    is_primary_key: true,
                },
                ColumnMetadata {
                    ordinal_position: 2,
                    name: "created".to_string(),
                    sql_type: SqlType::new("date"),
                    is_nullable: true,
                    default: None,
                    is_primary_key: false,
                },
            ],
            primary_key: vec![pk.to_string()],
        }
    }

    #[tokio::test]
    async fn missing_table_does_not_stop_the_others() {
        let mut tables = HashMap::new();
        tables.insert("beatdowns", simple_schema("beatdowns", "timestamp"));
        tables.insert("users", simple_schema("users", "user_id"));
        // `aos` deliberately absent.
        let source = FakeSource { tables };

        let renderer = ModelRenderer::new().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let targets = default_targets();

        let outcome = generate_all(&source, &renderer, &targets, out_dir.path()).await;

        assert_eq!(outcome.generated, ["beatdowns", "users"]);
        assert_eq!(outcome.failed, ["aos"]);
        assert_eq!(outcome.attempted(), 3);

        assert!(out_dir.path().join("beatdown.py").exists());
        assert!(out_dir.path().join("user.py").exists());
        assert!(!out_dir.path().join("ao.py").exists());

        let content = fs::read_to_string(out_dir.path().join("user.py")).unwrap();
        assert!(content.contains("DO NOT EDIT MANUALLY"), "{content}");
        assert!(content.contains("class SqlUserModel(Base):"), "{content}");
    }

    #[tokio::test]
    async fn unsupported_type_fails_only_its_table() {
        let mut broken = simple_schema("aos", "channel_id");
        broken.columns[1].sql_type = SqlType::new("geometry");

        let mut tables = HashMap::new();
        tables.insert("beatdowns", simple_schema("beatdowns", "timestamp"));
        tables.insert("aos", broken);
        tables.insert("users", simple_schema("users", "user_id"));
        let source = FakeSource { tables };

        let renderer = ModelRenderer::new().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let targets = default_targets();

        let outcome = generate_all(&source, &renderer, &targets, out_dir.path()).await;

        assert_eq!(outcome.generated, ["beatdowns", "users"]);
        assert_eq!(outcome.failed, ["aos"]);
    }

    #[tokio::test]
    async fn empty_source_attempts_every_table_and_writes_nothing() {
        let source = FakeSource {
            tables: HashMap::new(),
        };
        let renderer = ModelRenderer::new().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let targets = default_targets();

        let outcome = generate_all(&source, &renderer, &targets, out_dir.path()).await;

        assert!(outcome.generated.is_empty());
        assert_eq!(outcome.failed, ["beatdowns", "aos", "users"]);
        assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 0);
    }
}
