//! Client error types

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to a Taskboard server
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The server answered with a non-success status and no GraphQL errors
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The server reported a GraphQL error
    #[error("{message}")]
    Graphql {
        message: String,
        code: Option<String>,
    },

    /// The response could not be understood
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// The task is not in the local cache
    #[error("Task not in local cache: {id}")]
    UnknownTask { id: String },

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    pub fn connection_error(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn graphql(message: impl Into<String>, code: Option<String>) -> Self {
        Self::Graphql {
            message: message.into(),
            code,
        }
    }

    /// Machine-readable code attached by the server, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Graphql { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the server reported that the task does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Graphql { code, .. } => code.as_deref() == Some("TASK_NOT_FOUND"),
            Self::Http { status, .. } => *status == 404,
            _ => false,
        }
    }
}
