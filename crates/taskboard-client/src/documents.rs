//! GraphQL documents sent by the client.

/// Fetch tasks, optionally filtered by category and capped at `take`
pub const GET_TASKS: &str = r#"query GetTasks($category: String, $take: Int) {
  getTasks(category: $category, take: $take) {
    id
    title
    description
    status
    category
    createdAt
    user {
      firstName
      lastName
    }
  }
}"#;

/// Overwrite the status of one task
pub const UPDATE_TASK_STATUS: &str = r#"mutation UpdateTaskStatus($id: ID!, $status: String!) {
  updateTaskStatus(id: $id, status: $status) {
    id
    title
    description
    status
    category
    createdAt
    user {
      firstName
      lastName
    }
  }
}"#;
