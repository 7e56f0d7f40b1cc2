//! GraphQL transport handlers
//!
//! Both verbs share one path. `POST` receives the raw body and decodes it
//! here, `GET` reads `query`, `operationName` and `variables` from the query
//! string. Requests that cannot be decoded at all get a `400` whose body still
//! has the GraphQL `errors` shape; everything else is handed to the schema and
//! answered with `200`, with any failures listed under `errors`.

use axum::{
    Extension,
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use super::request_id_of;
use crate::runtime::TaskboardRuntime;
use crate::runtime::error::{RequestId, RequestIdExtension};

/// POST {graphql_path} - Execute a query or mutation from a JSON body
pub async fn graphql_post(
    State(runtime): State<TaskboardRuntime>,
    request_id: Option<Extension<RequestIdExtension>>,
    body: Bytes,
) -> Response {
    let request_id = request_id_of(request_id);

    match serde_json::from_slice::<async_graphql::Request>(&body) {
        Ok(request) => execute(&runtime, request, request_id).await,
        Err(e) => bad_request(&request_id, format!("Invalid request body: {e}")),
    }
}

/// GET {graphql_path} - Execute from query-string parameters
///
/// Without a query string the GraphiQL playground is served when enabled.
pub async fn graphql_get(
    State(runtime): State<TaskboardRuntime>,
    request_id: Option<Extension<RequestIdExtension>>,
    RawQuery(query): RawQuery,
) -> Response {
    let request_id = request_id_of(request_id);

    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return playground_or_missing(&runtime, &request_id);
    };

    match async_graphql::http::parse_query_string(&query) {
        Ok(request) => execute(&runtime, request, request_id).await,
        Err(e) => bad_request(&request_id, format!("Invalid query string: {e}")),
    }
}

async fn execute(
    runtime: &TaskboardRuntime,
    request: async_graphql::Request,
    request_id: RequestId,
) -> Response {
    debug!(
        request_id = %request_id,
        operation = ?request.operation_name,
        "Executing GraphQL request"
    );

    let response = runtime.schema.execute(request.data(request_id.clone())).await;

    if response.is_err() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        warn!(request_id = %request_id, errors = ?messages, "GraphQL request completed with errors");
    }

    (StatusCode::OK, Json(response)).into_response()
}

fn bad_request(request_id: &RequestId, message: String) -> Response {
    debug!(request_id = %request_id, %message, "Rejecting undecodable GraphQL request");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": [{ "message": message }] })),
    )
        .into_response()
}

#[cfg(feature = "playground")]
fn playground_or_missing(runtime: &TaskboardRuntime, request_id: &RequestId) -> Response {
    if runtime.config.enable_playground {
        let page = async_graphql::http::GraphiQLSource::build()
            .endpoint(&runtime.config.graphql_path)
            .finish();
        return axum::response::Html(page).into_response();
    }
    bad_request(request_id, "Missing query parameter".to_string())
}

#[cfg(not(feature = "playground"))]
fn playground_or_missing(_runtime: &TaskboardRuntime, request_id: &RequestId) -> Response {
    bad_request(request_id, "Missing query parameter".to_string())
}
