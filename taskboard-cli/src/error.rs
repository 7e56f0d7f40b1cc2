//! CLI error type

use taskboard_client::ClientError;
use taskboard_core::IdValidationError;
use taskboard_http::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(std::io::Error),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to load tasks: {0}")]
    Fetch(String),

    #[error("Invalid task id: {0}")]
    InvalidId(#[from] IdValidationError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
