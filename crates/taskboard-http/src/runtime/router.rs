//! HTTP router configuration
//!
//! This module provides router setup and route registration for the HTTP runtime.

use std::time::Duration;

use axum::{Router, middleware, routing::get};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::runtime::{
    TaskboardRuntime,
    error::request_id_middleware,
    handlers::{get_task, graphql_get, graphql_post, health_check},
};

impl TaskboardRuntime {
    /// Create the Axum router with all endpoints and middleware
    pub fn router(self) -> Router {
        let config = self.config.clone();

        let mut router = Router::new()
            .route(&config.graphql_path, get(graphql_get).post(graphql_post))
            .route("/tasks/{id}", get(get_task))
            .route("/health", get(health_check))
            .with_state(self)
            .layer(RequestBodyLimitLayer::new(config.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware));

        if config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }
}
