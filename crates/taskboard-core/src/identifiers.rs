//! Task identifiers
//!
//! Task ids are opaque strings assigned once at creation. The only validation
//! applied is a presence check: an id must contain at least one
//! non-whitespace character. Length is not bounded, so a long id that
//! matches nothing is reported as not found by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for identifier validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    /// The identifier string is empty
    Empty,
    /// The identifier contains only whitespace
    WhitespaceOnly,
}

impl fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Identifier cannot be empty"),
            Self::WhitespaceOnly => write!(f, "Identifier cannot be whitespace-only"),
        }
    }
}

impl std::error::Error for IdValidationError {}

/// Stable identifier of a task
///
/// # Examples
///
/// ```rust
/// use taskboard_core::TaskId;
///
/// let id = TaskId::parse("7").unwrap();
/// assert_eq!(id.as_str(), "7");
///
/// assert!(TaskId::parse("").is_err());
/// assert!(TaskId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Parse a task id, applying the presence check
    pub fn parse(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(IdValidationError::Empty);
        }
        if id.trim().is_empty() {
            return Err(IdValidationError::WhitespaceOnly);
        }
        Ok(Self(id.to_string()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a task id without validation (for seed data and tests)
    #[doc(hidden)]
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
