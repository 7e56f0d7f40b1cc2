//! # Taskboard Core
//!
//! Core types for the Taskboard service: the [`Task`] record, its embedded
//! [`User`], the [`TaskStatus`] value set, the [`TaskStore`] abstraction with
//! its in-memory implementation, and the query pipeline that the GraphQL
//! resolvers run against the store.
//!
//! ```rust
//! use taskboard_core::{InMemoryTaskStore, TaskQuery, TaskStore};
//!
//! let store = InMemoryTaskStore::seeded();
//! let tasks = TaskQuery::new()
//!     .category("Estudos")
//!     .take(1)
//!     .run(&store)
//!     .unwrap();
//!
//! assert_eq!(tasks.len(), 1);
//! assert_eq!(tasks[0].id.as_str(), "8");
//! ```

pub mod error;
pub mod identifiers;
pub mod query;
pub mod seed;
pub mod status;
pub mod store;
pub mod task;

pub use error::{TaskError, TaskResult};
pub use identifiers::{IdValidationError, TaskId};
pub use query::TaskQuery;
pub use seed::seed_tasks;
pub use status::{StatusPolicy, TaskStatus};
pub use store::{InMemoryTaskStore, SharedTaskStore, TaskStore};
pub use task::{Task, User};
