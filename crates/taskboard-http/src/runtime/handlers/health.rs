//! Health check handler

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use taskboard_core::TaskStore;

use crate::runtime::TaskboardRuntime;

/// GET /health - Liveness check with version, uptime and store size
///
/// Answers `503` with status `unavailable` when the store cannot be read.
pub async fn health_check(State(runtime): State<TaskboardRuntime>) -> (StatusCode, Json<Value>) {
    let (status, status_code, task_count) = match runtime.store.len() {
        Ok(count) => ("healthy", StatusCode::OK, Some(count)),
        Err(e) => {
            tracing::error!(error = %e, "Task store unavailable during health check");
            ("unavailable", StatusCode::SERVICE_UNAVAILABLE, None)
        }
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "service": "taskboard-http",
            "timestamp": chrono::Utc::now(),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_seconds": runtime.uptime_seconds(),
            "task_count": task_count,
        })),
    )
}
