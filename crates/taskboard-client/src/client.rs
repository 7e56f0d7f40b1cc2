//! HTTP client for the Taskboard GraphQL endpoint
//!
//! [`TaskboardClient`] posts JSON `{query, operationName, variables}` bodies
//! to the GraphQL endpoint and unwraps the `{data, errors}` envelope. The
//! first GraphQL error entry becomes [`ClientError::Graphql`], carrying the
//! server's `extensions.code` when present.
//!
//! # Connection Behavior
//!
//! Requests time out after 30 seconds. Nothing is retried; callers that want
//! fresh data after a failure call the fetch again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use taskboard_core::{Task, TaskId, TaskStatus};
use tracing::{debug, info};
use url::Url;

use crate::documents::{GET_TASKS, UPDATE_TASK_STATUS};
use crate::error::{ClientError, ClientResult};
use crate::source::TaskSource;

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of tasks requested when the caller does not say
pub const DEFAULT_TAKE: i32 = 10;

/// Client for one Taskboard GraphQL endpoint
#[derive(Clone)]
pub struct TaskboardClient {
    /// Absolute URL of the GraphQL endpoint
    endpoint: Url,
    http: Client,
}

impl std::fmt::Debug for TaskboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskboardClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[derive(Deserialize)]
struct GraphqlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
    #[serde(default)]
    extensions: Option<Value>,
}

impl GraphqlErrorEntry {
    fn into_error(self) -> ClientError {
        let code = self
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string);
        ClientError::graphql(self.message, code)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTasksData {
    get_tasks: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskStatusData {
    update_task_status: Task,
}

impl TaskboardClient {
    /// Create a client for the GraphQL endpoint at `endpoint`
    ///
    /// `endpoint` is the full URL, e.g. `http://localhost:3000/api/graphql`.
    pub fn new(endpoint: impl AsRef<str>) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(format!("taskboard-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ClientError::connection_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Self::with_http_client(endpoint, http)
    }

    /// Create a client with a custom HTTP client
    pub fn with_http_client(endpoint: impl AsRef<str>, http: Client) -> ClientResult<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self { endpoint, http })
    }

    /// The GraphQL endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch tasks newest first
    ///
    /// A `take` of `None` requests [`DEFAULT_TAKE`] tasks.
    pub async fn fetch_tasks(
        &self,
        category: Option<&str>,
        take: Option<i32>,
    ) -> ClientResult<Vec<Task>> {
        let take = take.unwrap_or(DEFAULT_TAKE);
        debug!(category = ?category, take, "Fetching tasks");

        let data: GetTasksData = self
            .execute(
                GET_TASKS,
                "GetTasks",
                json!({ "category": category, "take": take }),
            )
            .await?;

        debug!(count = data.get_tasks.len(), "Fetched tasks");
        Ok(data.get_tasks)
    }

    /// Set the status of one task and return the updated record
    pub async fn update_task_status(
        &self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> ClientResult<Task> {
        let data: UpdateTaskStatusData = self
            .execute(
                UPDATE_TASK_STATUS,
                "UpdateTaskStatus",
                json!({ "id": id.as_str(), "status": status.as_str() }),
            )
            .await?;

        info!(
            task_id = %data.update_task_status.id,
            status = %data.update_task_status.status,
            "Updated task status"
        );
        Ok(data.update_task_status)
    }

    /// Send the opposite of `current` as the new status of `id`
    pub async fn toggle_status(&self, id: &TaskId, current: &TaskStatus) -> ClientResult<Task> {
        self.update_task_status(id, &current.toggled()).await
    }

    /// Fetch one task from the server's detail route (`/tasks/{id}`)
    pub async fn get_task(&self, id: &TaskId) -> ClientResult<Task> {
        let url = self
            .endpoint
            .join(&format!("/tasks/{}", id.as_str()))
            .map_err(|e| ClientError::protocol_error(format!("Invalid endpoint path: {}", e)))?;

        debug!(url = %url, "Fetching task detail");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::connection_error(format!("Failed to fetch task: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: format!("Task not found: {}", id),
            });
        }
        if !status.is_success() {
            return Err(Self::http_error(status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::protocol_error(format!("Failed to parse task: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        operation_name: &str,
        variables: Value,
    ) -> ClientResult<T> {
        let body = json!({
            "query": query,
            "operationName": operation_name,
            "variables": variables,
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ClientError::connection_error(format!("Failed to reach {}: {}", self.endpoint, e))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ClientError::connection_error(format!("Failed to read response body: {}", e))
        })?;

        // Transport rejections still carry a GraphQL-shaped `errors` list
        let envelope = match serde_json::from_str::<GraphqlEnvelope<T>>(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Http {
                    status: status.as_u16(),
                    message: text,
                });
            }
            Err(e) => {
                return Err(ClientError::protocol_error(format!(
                    "Failed to parse {} response: {}",
                    operation_name, e
                )));
            }
        };

        if let Some(entry) = envelope.errors.into_iter().next() {
            return Err(entry.into_error());
        }

        match envelope.data {
            Some(data) if status.is_success() => Ok(data),
            _ if !status.is_success() => Err(ClientError::Http {
                status: status.as_u16(),
                message: format!("{} failed", operation_name),
            }),
            _ => Err(ClientError::protocol_error(format!(
                "{} response has neither data nor errors",
                operation_name
            ))),
        }
    }

    async fn http_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
        ClientError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl TaskSource for TaskboardClient {
    async fn fetch_tasks(
        &self,
        category: Option<&str>,
        take: Option<i32>,
    ) -> ClientResult<Vec<Task>> {
        TaskboardClient::fetch_tasks(self, category, take).await
    }

    async fn update_task_status(&self, id: &TaskId, status: &TaskStatus) -> ClientResult<Task> {
        TaskboardClient::update_task_status(self, id, status).await
    }
}
