//! Task detail handler

use axum::{
    Extension,
    extract::{Path, State},
    response::Json,
};
use taskboard_core::{Task, TaskError, TaskId, TaskStore};

use super::request_id_of;
use crate::runtime::TaskboardRuntime;
use crate::runtime::error::{ApiError, RequestIdExtension};

/// GET /tasks/{id} - One task as JSON
///
/// Reads the live store, so status changes made through `updateTaskStatus`
/// are visible here.
pub async fn get_task(
    State(runtime): State<TaskboardRuntime>,
    request_id: Option<Extension<RequestIdExtension>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let request_id = request_id_of(request_id);

    let task_id = TaskId::parse(&id)
        .map_err(|e| ApiError::from_task_error(TaskError::from(e), request_id.clone()))?;

    match runtime.store.get(&task_id) {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(ApiError::task_not_found(task_id.as_str(), request_id)),
        Err(e) => Err(ApiError::from_task_error(e, request_id)),
    }
}
