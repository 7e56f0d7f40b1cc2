//! Root resolvers for `getTasks` and `updateTaskStatus`.

use async_graphql::{Context, ID, Object, Result};
use taskboard_core::{SharedTaskStore, StatusPolicy, TaskError, TaskId, TaskQuery, TaskStore};
use tracing::{debug, warn};

use super::schema::TaskNode;
use super::to_graphql_error;
use crate::runtime::error::RequestId;

/// Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Tasks ordered by `createdAt` descending, optionally restricted to one
    /// category and capped at `take` entries
    async fn get_tasks(
        &self,
        ctx: &Context<'_>,
        category: Option<String>,
        take: Option<i32>,
    ) -> Result<Vec<TaskNode>> {
        let store = ctx.data::<SharedTaskStore>()?;
        let query = TaskQuery::from_args(category, take).map_err(to_graphql_error)?;
        let tasks = query.run(store.as_ref()).map_err(to_graphql_error)?;
        Ok(tasks.into_iter().map(TaskNode::from).collect())
    }
}

/// Mutation root
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Overwrite the status of one task and return the updated task
    async fn update_task_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: String,
    ) -> Result<TaskNode> {
        let store = ctx.data::<SharedTaskStore>()?;
        let policy = ctx.data_opt::<StatusPolicy>().copied().unwrap_or_default();

        let task_id = TaskId::parse(id.as_str())
            .map_err(|e| to_graphql_error(TaskError::from(e)))?;
        let status = policy.admit(&status).map_err(to_graphql_error)?;

        match store.set_status(&task_id, status) {
            Ok(task) => {
                debug!(task_id = %task.id, status = %task.status, "updateTaskStatus");
                Ok(task.into())
            }
            Err(err) => {
                warn!(
                    request_id = ?ctx.data_opt::<RequestId>().map(RequestId::as_str),
                    task_id = %task_id,
                    error = %err,
                    "updateTaskStatus failed"
                );
                Err(to_graphql_error(err))
            }
        }
    }
}
