//! HTTP runtime configuration
//!
//! This module provides the configuration structure for the HTTP runtime:
//! listen address, GraphQL path, request limits and the status policy applied
//! by `updateTaskStatus`.

use taskboard_core::StatusPolicy;

/// Default path of the GraphQL endpoint
pub const DEFAULT_GRAPHQL_PATH: &str = "/api/graphql";

/// HTTP runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind (0 picks a free port)
    pub port: u16,
    /// Path serving GraphQL over GET and POST
    pub graphql_path: String,
    /// Enable CORS for cross-origin requests
    pub enable_cors: bool,
    /// Serve GraphiQL on GET requests without a query
    pub enable_playground: bool,
    /// How `updateTaskStatus` treats unknown status strings
    pub status_policy: StatusPolicy,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            enable_cors: true,
            enable_playground: cfg!(feature = "playground"),
            status_policy: StatusPolicy::Lenient,
            request_timeout_secs: 30,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl RuntimeConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
