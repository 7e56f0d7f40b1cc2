//! HTTP request handlers
//!
//! This module contains all the HTTP endpoint handlers organized by functionality.

pub mod graphql;
pub mod health;
pub mod tasks;

use axum::Extension;

use crate::runtime::error::{RequestId, RequestIdExtension};

pub use graphql::{graphql_get, graphql_post};
pub use health::health_check;
pub use tasks::get_task;

/// Request id assigned by the middleware, or a fresh one when the handler is
/// mounted without it
pub(crate) fn request_id_of(extension: Option<Extension<RequestIdExtension>>) -> RequestId {
    extension
        .map(|Extension(RequestIdExtension(id))| id)
        .unwrap_or_else(RequestId::generate)
}
