//! The `getTasks` pipeline: filter by category, newest first, cap at `take`.

use tracing::debug;

use crate::error::{TaskError, TaskResult};
use crate::store::TaskStore;
use crate::task::Task;

/// Arguments of a task listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    category: Option<String>,
    take: Option<usize>,
}

impl TaskQuery {
    /// A query returning every task
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw GraphQL arguments
    ///
    /// An empty `category` means "all categories" and a `take` of zero means
    /// "no cap". A negative `take` is rejected.
    pub fn from_args(category: Option<String>, take: Option<i32>) -> TaskResult<Self> {
        let take = match take {
            Some(n) if n < 0 => {
                return Err(TaskError::invalid_argument(
                    "take",
                    format!("must be a positive integer, got {n}"),
                ));
            }
            Some(0) | None => None,
            Some(n) => Some(n as usize),
        };

        Ok(Self {
            category: category.filter(|c| !c.is_empty()),
            take,
        })
    }

    /// Keep only tasks whose category equals `category` exactly
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Return at most `take` tasks
    #[must_use]
    pub fn take(mut self, take: usize) -> Self {
        self.take = (take > 0).then_some(take);
        self
    }

    /// Apply the query to a list of tasks in store order
    ///
    /// The sort is stable, so tasks sharing a timestamp keep their store order.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        let mut selected: Vec<Task> = match &self.category {
            Some(category) => tasks
                .into_iter()
                .filter(|task| &task.category == category)
                .collect(),
            None => tasks,
        };

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(take) = self.take {
            selected.truncate(take);
        }
        selected
    }

    /// Run the query against a store
    pub fn run<S: TaskStore + ?Sized>(&self, store: &S) -> TaskResult<Vec<Task>> {
        let tasks = self.apply(store.list()?);
        debug!(
            category = ?self.category,
            take = ?self.take,
            returned = tasks.len(),
            "Listed tasks"
        );
        Ok(tasks)
    }
}
