//! # Taskboard Client
//!
//! Client side of the Taskboard service:
//!
//! - [`TaskboardClient`] sends the `GetTasks` and `UpdateTaskStatus`
//!   operations to a running server over HTTP.
//! - [`TaskView`] is the local cache a front end renders from. It refetches
//!   when the category filter changes, merges mutation results in place and
//!   ignores responses that were overtaken by a newer fetch.
//! - [`StatusToggle`] wraps a single status flip with its own loading and
//!   error state.
//!
//! Both stateful pieces talk to the server through the [`TaskSource`] trait,
//! so they can be driven by a fake in tests.
//!
//! ```rust,no_run
//! use taskboard_client::{StatusToggle, TaskView, TaskboardClient};
//!
//! # async fn run() -> Result<(), taskboard_client::ClientError> {
//! let client = TaskboardClient::new("http://localhost:3000/api/graphql")?;
//! let mut view = TaskView::new();
//!
//! view.select_category(&client, Some("Estudos".to_string())).await;
//!
//! let mut toggle = StatusToggle::new();
//! if let Some(first) = view.tasks().first().cloned() {
//!     toggle.toggle_in_view(&client, &mut view, &first.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod documents;
pub mod error;
pub mod source;
pub mod toggle;
pub mod view;

pub use client::{DEFAULT_TAKE, TaskboardClient};
pub use error::{ClientError, ClientResult};
pub use source::TaskSource;
pub use toggle::StatusToggle;
pub use view::{FetchOutcome, FetchTicket, StatusFilter, TaskStats, TaskView};
