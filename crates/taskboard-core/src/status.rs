//! Task status values and the policy applied to incoming status strings.
//!
//! A task is either `pending` or `completed`. The mutation surface has always
//! accepted the target status as a free string, and values outside the two
//! known ones were persisted as-is. [`StatusPolicy::Lenient`] keeps that
//! behaviour (such values land in [`TaskStatus::Other`]);
//! [`StatusPolicy::Strict`] rejects them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TaskError, TaskResult};

/// Status of a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Not done yet
    Pending,
    /// Done
    Completed,
    /// Any other value admitted by the lenient policy
    Other(String),
}

impl TaskStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the value is one of the two known statuses
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The status a toggle sends for a task currently in `self`
    ///
    /// `pending` flips to `completed`; everything else flips to `pending`.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed | Self::Other(_) => Self::Pending,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `updateTaskStatus` treats status strings outside `{pending, completed}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Persist any string
    #[default]
    Lenient,
    /// Reject unknown values with [`TaskError::InvalidStatus`]
    Strict,
}

impl StatusPolicy {
    /// Turn a caller-supplied status string into a [`TaskStatus`]
    pub fn admit(&self, raw: &str) -> TaskResult<TaskStatus> {
        let status = TaskStatus::from(raw);
        match (self, &status) {
            (Self::Strict, TaskStatus::Other(_)) => Err(TaskError::invalid_status(raw)),
            _ => Ok(status),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown status mode '{other}', expected 'lenient' or 'strict'"
            )),
        }
    }
}
