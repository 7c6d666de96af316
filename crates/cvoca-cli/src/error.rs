//! CLI error types.

use cvoca_core::TracingError;
use cvoca_store::StoreError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Data source could not be set up.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No event carries the requested identifier.
    #[error("no event with id {0}")]
    EventNotFound(u64),

    /// Output could not be produced.
    #[error("output error: {0}")]
    Output(String),

    /// Logging could not be initialized.
    #[error(transparent)]
    Tracing(#[from] TracingError),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(format!("failed to serialize JSON: {}", err))
    }
}
