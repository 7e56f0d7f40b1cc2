//! # Runtime Module
//!
//! The request/response side of Taskboard. [`TaskboardRuntime`] owns the
//! shared task store and the executable GraphQL schema; [`router`](TaskboardRuntime::router)
//! turns it into an Axum application.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use taskboard_core::InMemoryTaskStore;
//! use taskboard_http::runtime::{RuntimeConfig, TaskboardRuntime, shutdown_signal};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RuntimeConfig::default();
//!     let runtime = TaskboardRuntime::new(InMemoryTaskStore::seeded().shared(), config.clone());
//!     let listener = TcpListener::bind(config.bind_address()).await?;
//!
//!     axum::serve(listener, runtime.router())
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await?;
//!     Ok(())
//! }
//! ```

/// Environment-based configuration loading.
pub mod config;
/// Structured HTTP errors and request ids.
pub mod error;
/// GraphQL schema and resolvers.
pub mod graphql;
/// HTTP request handlers organized by functionality.
pub mod handlers;
/// Runtime state and server entry points.
pub mod http;
/// HTTP router configuration and route registration.
pub mod router;
/// Graceful shutdown signal handling.
pub mod shutdown;

pub use config::{ConfigError, RuntimeConfigBuilder};
pub use error::{ApiError, ErrorCode, ErrorResponse, RequestId, request_id_middleware};
pub use graphql::{TaskboardSchema, build_schema};
pub use http::{RuntimeConfig, TaskboardRuntime};
pub use shutdown::shutdown_signal;
