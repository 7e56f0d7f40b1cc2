//! One-shot status flip with its own loading and error state.

use taskboard_core::{Task, TaskId, TaskStatus};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::source::TaskSource;
use crate::view::TaskView;

/// Loading and error state around `updateTaskStatus`
///
/// The new status is always computed from the caller's view of the current
/// one: `pending` becomes `completed`, anything else becomes `pending`.
#[derive(Debug, Clone, Default)]
pub struct StatusToggle {
    loading: bool,
    error: Option<String>,
}

impl StatusToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Display string of the last failure, cleared when a toggle starts
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Flip `id` away from `current` and return the server's updated record
    ///
    /// On failure the error message is kept and the error is returned.
    pub async fn toggle<S: TaskSource + ?Sized>(
        &mut self,
        source: &S,
        id: &TaskId,
        current: &TaskStatus,
    ) -> ClientResult<Task> {
        self.loading = true;
        self.error = None;

        let target = current.toggled();
        debug!(task_id = %id, from = %current, to = %target, "Toggling task status");
        let result = source.update_task_status(id, &target).await;

        self.loading = false;
        if let Err(err) = &result {
            warn!(task_id = %id, error = %err, "Toggling task status failed");
            self.error = Some(err.to_string());
        }
        result
    }

    /// Toggle a task cached in `view` and merge the result back into it
    pub async fn toggle_in_view<S: TaskSource + ?Sized>(
        &mut self,
        source: &S,
        view: &mut TaskView,
        id: &TaskId,
    ) -> ClientResult<Task> {
        let current = match view.get(id) {
            Some(task) => task.status.clone(),
            None => {
                let err = ClientError::UnknownTask {
                    id: id.to_string(),
                };
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        let updated = self.toggle(source, id, &current).await?;
        view.merge(updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use taskboard_core::{InMemoryTaskStore, TaskStore};

    /// Applies updates to an in-memory store
    struct StoreSource {
        store: InMemoryTaskStore,
        sent: Mutex<Vec<TaskStatus>>,
    }

    impl StoreSource {
        fn seeded() -> Self {
            Self {
                store: InMemoryTaskStore::seeded(),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TaskSource for StoreSource {
        async fn fetch_tasks(
            &self,
            category: Option<&str>,
            take: Option<i32>,
        ) -> ClientResult<Vec<Task>> {
            let query = taskboard_core::TaskQuery::from_args(category.map(str::to_string), take)
                .map_err(|e| ClientError::graphql(e.to_string(), Some(e.code().to_string())))?;
            query
                .run(&self.store)
                .map_err(|e| ClientError::graphql(e.to_string(), Some(e.code().to_string())))
        }

        async fn update_task_status(
            &self,
            id: &TaskId,
            status: &TaskStatus,
        ) -> ClientResult<Task> {
            self.sent.lock().unwrap().push(status.clone());
            self.store
                .set_status(id, status.clone())
                .map_err(|e| ClientError::graphql(e.to_string(), Some(e.code().to_string())))
        }
    }

    fn id(raw: &str) -> TaskId {
        TaskId::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_sends_negation() {
        let source = StoreSource::seeded();
        let mut toggle = StatusToggle::new();

        let updated = toggle
            .toggle(&source, &id("1"), &TaskStatus::Pending)
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Completed);

        toggle
            .toggle(&source, &id("1"), &TaskStatus::Other("archived".into()))
            .await
            .unwrap();

        assert_eq!(
            *source.sent.lock().unwrap(),
            [TaskStatus::Completed, TaskStatus::Pending]
        );
        assert!(!toggle.is_loading());
        assert_eq!(toggle.error(), None);
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_message_and_returns_error() {
        let source = StoreSource::seeded();
        let mut toggle = StatusToggle::new();

        let err = toggle
            .toggle(&source, &id("999"), &TaskStatus::Pending)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(toggle.error(), Some("Task not found: 999"));
        assert!(!toggle.is_loading());
    }

    #[tokio::test]
    async fn test_toggle_in_view_merges_result() {
        let source = StoreSource::seeded();
        let mut view = TaskView::new();
        view.refresh(&source).await;
        let before = view.get(&id("2")).unwrap().clone();
        let mut toggle = StatusToggle::new();

        let updated = toggle.toggle_in_view(&source, &mut view, &id("2")).await.unwrap();

        assert_eq!(updated.status, TaskStatus::Pending);
        let cached = view.get(&id("2")).unwrap();
        assert_eq!(cached.status, TaskStatus::Pending);
        assert_eq!(cached.title, before.title);
        assert_eq!(cached.user, before.user);
    }

    #[tokio::test]
    async fn test_double_toggle_restores_status() {
        let source = StoreSource::seeded();
        let mut view = TaskView::new();
        view.refresh(&source).await;
        let mut toggle = StatusToggle::new();

        toggle.toggle_in_view(&source, &mut view, &id("4")).await.unwrap();
        toggle.toggle_in_view(&source, &mut view, &id("4")).await.unwrap();

        assert_eq!(view.get(&id("4")).unwrap().status, TaskStatus::Pending);
        assert_eq!(
            source.store.get(&id("4")).unwrap().unwrap().status,
            TaskStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_toggle_in_view_unknown_task() {
        let source = StoreSource::seeded();
        let mut view = TaskView::new();
        let mut toggle = StatusToggle::new();

        let err = toggle
            .toggle_in_view(&source, &mut view, &id("3"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::UnknownTask { .. }));
        assert!(source.sent.lock().unwrap().is_empty());
    }
}
