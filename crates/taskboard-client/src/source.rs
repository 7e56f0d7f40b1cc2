//! The seam between the stateful client pieces and the server.

use async_trait::async_trait;
use taskboard_core::{Task, TaskId, TaskStatus};

use crate::error::ClientResult;

/// Anything that can answer `getTasks` and `updateTaskStatus`
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Tasks newest first, optionally filtered by category and capped at `take`
    async fn fetch_tasks(&self, category: Option<&str>, take: Option<i32>)
    -> ClientResult<Vec<Task>>;

    /// Set the status of one task and return the updated record
    async fn update_task_status(&self, id: &TaskId, status: &TaskStatus) -> ClientResult<Task>;
}
