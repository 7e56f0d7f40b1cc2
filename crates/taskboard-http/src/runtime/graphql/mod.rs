//! GraphQL contract of the service
//!
//! [`schema`] declares the `Task` and `User` output types, [`resolvers`]
//! implements `getTasks` and `updateTaskStatus` against the shared
//! [`TaskStore`](taskboard_core::TaskStore). Requests are parsed and validated
//! against this schema before any resolver runs, so missing required
//! variables, unknown fields and type mismatches come back as GraphQL errors.

pub mod resolvers;
pub mod schema;

pub use resolvers::{MutationRoot, QueryRoot};
pub use schema::{TaskNode, UserNode};

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use taskboard_core::{SharedTaskStore, StatusPolicy, TaskError};

/// Executable schema type
pub type TaskboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`, applying `policy` to status updates
pub fn build_schema(store: SharedTaskStore, policy: StatusPolicy) -> TaskboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(policy)
        .finish()
}

/// Convert a task error into a GraphQL error entry carrying `extensions.code`
pub(crate) fn to_graphql_error(err: TaskError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code.to_string()))
}
