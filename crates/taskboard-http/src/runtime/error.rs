//! Error handling for the REST side of the HTTP runtime
//!
//! GraphQL failures are reported inside the GraphQL response body. This module
//! covers the remaining cases: transport-level rejections on the GraphQL path
//! (undecodable bodies) and the plain JSON routes, plus request id
//! propagation for log correlation.

use std::fmt;

use axum::{
    extract::Request,
    http::{
        StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use taskboard_core::TaskError;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LENGTH: usize = 128;

/// Correlation id attached to every request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// A fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Accept a client-supplied id
    ///
    /// Only ASCII alphanumerics, `-` and `_` are allowed, up to 128
    /// characters. Anything else would end up verbatim in log lines.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_REQUEST_ID_LENGTH
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request extension holding the id assigned by [`request_id_middleware`]
#[derive(Debug, Clone)]
pub struct RequestIdExtension(pub RequestId);

/// Middleware that reuses a valid `X-Request-ID` header or generates one
///
/// The id is stored in request extensions and echoed back on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(RequestId::parse)
        .unwrap_or_else(RequestId::generate);

    request
        .extensions_mut()
        .insert(RequestIdExtension(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

/// Machine-readable error codes of the JSON routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    TaskNotFound,
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "task_not_found",
            Self::InvalidInput => "invalid_input",
            Self::InternalError => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorCode,
    pub message: String,
    pub request_id: RequestId,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error returned by the JSON route handlers
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: RequestId,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            code,
            message: message.into(),
            request_id,
        }
    }

    pub fn task_not_found(id: &str, request_id: RequestId) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {id}"),
            request_id,
        )
    }

    /// Map a store-level error onto an HTTP error
    pub fn from_task_error(err: TaskError, request_id: RequestId) -> Self {
        let code = match &err {
            TaskError::NotFound { .. } => ErrorCode::TaskNotFound,
            TaskError::StoreUnavailable { .. } => ErrorCode::InternalError,
            TaskError::InvalidStatus { .. }
            | TaskError::InvalidId(_)
            | TaskError::InvalidArgument { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, err.to_string(), request_id)
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code,
            message: self.message.clone(),
            request_id: self.request_id.clone(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.code.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error_code = %self.code,
                request_id = %self.request_id,
                status_code = %status_code,
                error_message = %self.message,
                "HTTP request failed"
            );
        } else {
            tracing::debug!(
                error_code = %self.code,
                request_id = %self.request_id,
                status_code = %status_code,
                "HTTP request rejected"
            );
        }

        (status_code, Json(self.to_error_response())).into_response()
    }
}
