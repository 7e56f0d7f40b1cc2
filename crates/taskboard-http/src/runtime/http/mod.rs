//! # HTTP Runtime
//!
//! This module provides the shared runtime state handed to every request
//! handler: the task store, the executable GraphQL schema built over it, and
//! the runtime configuration.

mod config;


pub use config::{DEFAULT_GRAPHQL_PATH, RuntimeConfig};

use crate::runtime::graphql::{TaskboardSchema, build_schema};
use crate::runtime::shutdown::shutdown_signal;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use taskboard_core::{InMemoryTaskStore, SharedTaskStore};
use tokio::net::TcpListener;
use tracing::info;

/// HTTP server state shared by all handlers
#[derive(Clone)]
pub struct TaskboardRuntime {
    pub store: SharedTaskStore,
    pub schema: TaskboardSchema,
    pub config: Arc<RuntimeConfig>,
    started_at: Instant,
}

impl TaskboardRuntime {
    /// Create a runtime over `store`
    pub fn new(store: SharedTaskStore, config: RuntimeConfig) -> Self {
        info!(
            status_policy = %config.status_policy,
            graphql_path = %config.graphql_path,
            "Building task schema"
        );
        let schema = build_schema(store.clone(), config.status_policy);

        Self {
            store,
            schema,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Create a runtime over a fresh seeded in-memory store with default configuration
    pub fn seeded() -> Self {
        Self::new(InMemoryTaskStore::seeded().shared(), RuntimeConfig::default())
    }

    /// Seconds since the runtime was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Serve on `listener` until SIGINT/SIGTERM
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `signal` completes
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = listener.local_addr()?;
        let graphql_path = self.config.graphql_path.clone();
        info!(%address, "Taskboard listening on http://{}{}", address, graphql_path);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}
