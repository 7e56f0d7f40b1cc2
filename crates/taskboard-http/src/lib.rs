//! # Taskboard HTTP Runtime
//!
//! Serves the Taskboard GraphQL schema over HTTP using Axum.
//!
//! ## Endpoints
//!
//! - `POST /api/graphql`: execute a query or mutation from a JSON body
//! - `GET /api/graphql`: execute from query-string parameters, or serve the
//!   GraphiQL playground when no query is given (`playground` feature)
//! - `GET /tasks/{id}`: one task as JSON, `404` when absent
//! - `GET /health`: liveness information

pub mod runtime;

// Re-export main types for public API
pub use runtime::*;
