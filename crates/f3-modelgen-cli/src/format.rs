use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Formatter invoked over the output directory after generation.
const FORMATTER: &[&str] = &["ruff", "format"];

/// Errors from the post-generation formatting pass. Never propagated: the
/// generated files stay valid Python either way, so callers log and move on.
#[derive(Debug, Error)]
pub enum FormatterError {
    #[error("formatter exited with status {status}")]
    Failed {
        status: i32,
        stdout: String,
        stderr: String,
    },
    #[error("failed to run formatter: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Format the generated model files, logging the outcome as events.
pub fn format_generated_models(out_dir: &Path) {
    tracing::info!(event = "formatting_models_starting", output_dir = %out_dir.display());

    match run_formatter(FORMATTER, out_dir) {
        Ok(()) => tracing::info!(event = "formatting_models_successful"),
        Err(FormatterError::Failed {
            status,
            stdout,
            stderr,
        }) => {
            tracing::warn!(
                event = "formatting_models_failed",
                returncode = status,
                stdout = %stdout,
                stderr = %stderr,
            );
        }
        Err(err) => {
            tracing::warn!(event = "formatting_models_error", error = %err);
        }
    }
}

fn run_formatter(command: &[&str], out_dir: &Path) -> Result<(), FormatterError> {
    let output = Command::new(command[0])
        .args(&command[1..])
        .arg(out_dir)
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(FormatterError::Failed {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
