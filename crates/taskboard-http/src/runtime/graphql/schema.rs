//! GraphQL output types.

use async_graphql::{ID, SimpleObject};
use taskboard_core::{Task, User};

/// `User` as exposed over GraphQL
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserNode {
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserNode {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// `Task` as exposed over GraphQL
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Task")]
pub struct TaskNode {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub category: Option<String>,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub created_at: String,
    pub user: UserNode,
}

impl From<Task> for TaskNode {
    fn from(task: Task) -> Self {
        let created_at = task.created_at_iso();
        Self {
            id: ID(task.id.into()),
            title: task.title,
            description: task.description,
            status: task.status.into(),
            category: Some(task.category),
            created_at,
            user: task.user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::seed_tasks;

    #[test]
    fn test_task_node_preserves_fields() {
        let task = seed_tasks().into_iter().find(|t| t.id.as_str() == "8").unwrap();
        let node = TaskNode::from(task.clone());

        assert_eq!(node.id.as_str(), "8");
        assert_eq!(node.title, task.title);
        assert_eq!(node.status, "pending");
        assert_eq!(node.category.as_deref(), Some("Estudos"));
        assert_eq!(node.created_at, "2025-07-21T19:00:00.000Z");
        assert_eq!(node.user.first_name, task.user.first_name);
    }

    #[test]
    fn test_empty_category_is_sent_as_string() {
        let mut task = seed_tasks().remove(0);
        task.category = String::new();
        assert_eq!(TaskNode::from(task).category.as_deref(), Some(""));
    }
}
