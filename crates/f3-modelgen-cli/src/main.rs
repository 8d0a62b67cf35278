mod format;
mod logging;
mod run;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use thiserror::Error;

use f3_modelgen_core::{
    config::REQUIRED_ENV_VARS, default_targets, DbConfig, Error as CoreError,
};
use f3_modelgen_introspect::{MySqlSource, SchemaSource};
use f3_modelgen_render::ModelRenderer;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("{failed} of {attempted} tables failed")]
    TablesFailed { failed: usize, attempted: usize },
}

#[derive(Parser, Debug)]
#[command(
    name = "f3-modelgen",
    version,
    about = "Generate SQLAlchemy models from the F3 Nation database schema"
)]
struct Cli {
    /// Output directory for generated model files.
    #[arg(long, default_value = "f3_nation_data/models/sql")]
    out_dir: PathBuf,
    /// Skip the post-generation formatting pass.
    #[arg(long, default_value_t = false)]
    skip_format: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    logging::init();
    let cli = Cli::parse();

    let pool = connect().await?;
    // The pool is released unconditionally, whatever happened per table.
    let result = generate(&cli, &pool).await;
    pool.close().await;
    result
}

async fn connect() -> Result<MySqlPool, CliError> {
    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(
                event = "database_connection_failed",
                error = %err,
                required_env_vars = ?REQUIRED_ENV_VARS,
            );
            return Err(err.into());
        }
    };

    tracing::info!(
        event = "database_connection_starting",
        host = %config.host,
        database = %config.database,
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.connection_url())
        .await
        .map_err(|err| {
            let err = CoreError::Connection(err.to_string());
            tracing::error!(
                event = "database_connection_failed",
                error = %err,
                required_env_vars = ?REQUIRED_ENV_VARS,
            );
            err
        })?;

    tracing::info!(event = "database_connection_successful");
    Ok(pool)
}

async fn generate(cli: &Cli, pool: &MySqlPool) -> Result<(), CliError> {
    std::fs::create_dir_all(&cli.out_dir).map_err(CoreError::from)?;
    tracing::info!(event = "output_directory_ready", path = %cli.out_dir.display());

    let source = MySqlSource::new(pool.clone());
    let renderer = ModelRenderer::new()?;
    let targets = default_targets();

    tracing::info!(
        event = "generation_starting",
        engine = source.engine(),
        tables = targets.len(),
    );

    let outcome = run::generate_all(&source, &renderer, &targets, &cli.out_dir).await;

    tracing::info!(
        event = "generation_complete",
        output_dir = %cli.out_dir.display(),
        generated = outcome.generated.len(),
        failed = outcome.failed.len(),
    );

    if !cli.skip_format {
        format::format_generated_models(&cli.out_dir);
    }

    if outcome.failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::TablesFailed {
            failed: outcome.failed.len(),
            attempted: outcome.attempted(),
        })
    }
}
