//! Task storage
//!
//! [`TaskStore`] is the seam between the resolvers and whatever holds the
//! canonical task list. [`InMemoryTaskStore`] keeps the list in process memory
//! for the lifetime of the process; nothing survives a restart.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{TaskError, TaskResult};
use crate::identifiers::TaskId;
use crate::seed::seed_tasks;
use crate::status::TaskStatus;
use crate::task::Task;

/// Shared handle to a task store
pub type SharedTaskStore = Arc<dyn TaskStore>;

/// Read and status-write access to the canonical task list
pub trait TaskStore: Send + Sync {
    /// All records in insertion order
    fn list(&self) -> TaskResult<Vec<Task>>;

    /// A single record by id
    fn get(&self, id: &TaskId) -> TaskResult<Option<Task>>;

    /// Overwrite the status of one record and return the updated record
    ///
    /// Fails with [`TaskError::NotFound`] when no record has `id`; the store
    /// is left untouched in that case.
    fn set_status(&self, id: &TaskId, status: TaskStatus) -> TaskResult<Task>;

    /// Number of records
    fn len(&self) -> TaskResult<usize> {
        Ok(self.list()?.len())
    }

    fn is_empty(&self) -> TaskResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-lifetime task list guarded by a `RwLock`
///
/// # Example
///
/// ```rust
/// use taskboard_core::{InMemoryTaskStore, TaskId, TaskStatus, TaskStore};
///
/// let store = InMemoryTaskStore::seeded();
/// let id = TaskId::parse("1").unwrap();
///
/// let updated = store.set_status(&id, TaskStatus::Completed).unwrap();
/// assert_eq!(updated.status, TaskStatus::Completed);
/// assert_eq!(store.get(&id).unwrap().unwrap().status, TaskStatus::Completed);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tasks` in the given order
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Create a store holding the seed list
    pub fn seeded() -> Self {
        Self::from_tasks(seed_tasks())
    }

    /// Wrap into a shared trait object
    pub fn shared(self) -> SharedTaskStore {
        Arc::new(self)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(TaskError::store_unavailable)?;
        Ok(tasks.clone())
    }

    fn get(&self, id: &TaskId) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(TaskError::store_unavailable)?;
        Ok(tasks.iter().find(|task| &task.id == id).cloned())
    }

    fn set_status(&self, id: &TaskId, status: TaskStatus) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().map_err(TaskError::store_unavailable)?;
        let task = tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| TaskError::not_found(id.as_str()))?;

        debug!(task_id = %id, from = %task.status, to = %status, "Updating task status");
        task.status = status;
        Ok(task.clone())
    }

    fn len(&self) -> TaskResult<usize> {
        let tasks = self.tasks.read().map_err(TaskError::store_unavailable)?;
        Ok(tasks.len())
    }
}
