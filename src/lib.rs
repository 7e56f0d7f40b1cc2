//! # Taskboard
//!
//! A task board served over GraphQL. This crate re-exports the workspace
//! members under one name:
//!
//! - [`core`]: the task record, the task store and the `getTasks` pipeline
//! - [`http`]: the Axum runtime serving the schema
//! - [`client`]: the HTTP client and the local task cache

pub use taskboard_client as client;
pub use taskboard_core as core;
pub use taskboard_http as http;

pub use taskboard_client::{StatusToggle, TaskView, TaskboardClient};
pub use taskboard_core::{InMemoryTaskStore, Task, TaskId, TaskStatus, TaskStore, User};
pub use taskboard_http::{RuntimeConfig, TaskboardRuntime};
