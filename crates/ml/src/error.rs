//! CLI error types.

use ml_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize context: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
