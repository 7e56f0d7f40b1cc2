//! Task store and resolver errors.
//!
//! Every failure the core can report is a [`TaskError`]. Each variant carries
//! a stable machine-readable [`code`](TaskError::code) that the transport layer
//! copies into the `extensions.code` field of GraphQL error entries.

use thiserror::Error;

use crate::identifiers::IdValidationError;

/// Result type for task operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors that can occur while reading or mutating tasks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// No task with the given id exists in the store
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Status value rejected by the strict status policy
    #[error("Invalid status '{status}': expected 'pending' or 'completed'")]
    InvalidStatus { status: String },

    /// Task id failed the presence check
    #[error("Invalid task id: {0}")]
    InvalidId(#[from] IdValidationError),

    /// Query argument outside its accepted range
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Store lock was poisoned by a panicking writer
    #[error("Task store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl TaskError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid status error
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus {
            status: status.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a store unavailable error from a lock failure
    pub fn store_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable {
            reason: format!("Lock poisoned: {}", reason),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "TASK_NOT_FOUND",
            Self::InvalidStatus { .. } => "INVALID_STATUS",
            Self::InvalidId(_) | Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::StoreUnavailable { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let error = TaskError::not_found("42");
        assert_eq!(error.to_string(), "Task not found: 42");
        assert_eq!(error.code(), "TASK_NOT_FOUND");
    }

    #[test]
    fn test_invalid_status_message() {
        let error = TaskError::invalid_status("archived");
        assert!(error.to_string().contains("archived"));
        assert_eq!(error.code(), "INVALID_STATUS");
    }

    #[test]
    fn test_id_validation_error_conversion() {
        let error: TaskError = IdValidationError::Empty.into();
        assert!(matches!(error, TaskError::InvalidId(_)));
        assert_eq!(error.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_store_unavailable_maps_to_internal_error() {
        let error = TaskError::store_unavailable("writer panicked");
        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert!(error.to_string().contains("Lock poisoned"));
    }
}
