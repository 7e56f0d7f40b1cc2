//! Local task cache
//!
//! [`TaskView`] holds the list a front end renders: the tasks of the current
//! category, a loading flag and the last error message. It is written in
//! three ways only:
//!
//! - a completed fetch replaces the whole list,
//! - [`TaskView::merge`] replaces one entry with a mutation result,
//! - [`TaskView::invalidate`] refetches the current category.
//!
//! Every fetch is tagged with a token from a counter owned by the view. A
//! completion is applied only if its token is the latest one issued, so a
//! slow response for an old category can never overwrite a newer list.

use std::fmt;
use std::str::FromStr;

use taskboard_core::{Task, TaskId, TaskStatus};
use tracing::{debug, warn};

use crate::error::ClientResult;
use crate::source::TaskSource;

/// Local filter on status, applied to the cached list without refetching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: &TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => *status == TaskStatus::Pending,
            Self::Completed => *status == TaskStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown status filter '{other}', expected 'all', 'pending' or 'completed'"
            )),
        }
    }
}

/// Totals over the cached list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// A fetch that has been started but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    category: Option<String>,
    take: Option<i32>,
}

impl FetchTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn take(&self) -> Option<i32> {
        self.take
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced
    Applied,
    /// The fetch failed and the error was recorded; the list is unchanged
    Failed,
    /// A newer fetch was issued meanwhile; nothing changed
    Stale,
}

/// Client-side cache of the task list for one category filter
#[derive(Debug, Clone, Default)]
pub struct TaskView {
    category: Option<String>,
    take: Option<i32>,
    status_filter: StatusFilter,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    latest_token: u64,
}

impl TaskView {
    /// An empty view over all categories
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty view over `category`
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: normalize_category(Some(category.into())),
            ..Self::default()
        }
    }

    /// Cap fetches at `take` tasks; `None` leaves the client default
    #[must_use]
    pub fn with_take(mut self, take: Option<i32>) -> Self {
        self.take = take;
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The full cached list, newest first as delivered by the server
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Display string of the last failed fetch, cleared when a fetch starts
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Change the local status filter; never fetches
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Cached tasks passing the status filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.status_filter.matches(&task.status))
            .collect()
    }

    /// Totals over the whole cached list, ignoring the status filter
    pub fn stats(&self) -> TaskStats {
        self.tasks.iter().fold(TaskStats::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Other(_) => {}
            }
            stats
        })
    }

    /// Cached task with `id`
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Change the category filter
    ///
    /// Returns `true` when the filter actually changed, i.e. when the caller
    /// should fetch. An empty string means "all categories".
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        let category = normalize_category(category);
        if category == self.category {
            return false;
        }
        debug!(from = ?self.category, to = ?category, "Category filter changed");
        self.category = category;
        true
    }

    /// Start a fetch for the current filter
    ///
    /// Sets the loading flag, clears the error and issues a new token. Any
    /// ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_token += 1;
        self.loading = true;
        self.error = None;

        FetchTicket {
            token: self.latest_token,
            category: self.category.clone(),
            take: self.take,
        }
    }

    /// Apply the result of the fetch described by `ticket`
    ///
    /// Results of stale tickets are dropped without touching any state.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: ClientResult<Vec<Task>>,
    ) -> FetchOutcome {
        if ticket.token != self.latest_token {
            debug!(
                token = ticket.token,
                latest = self.latest_token,
                "Dropping stale fetch result"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(tasks) => {
                debug!(token = ticket.token, count = tasks.len(), "Applying fetch result");
                self.tasks = tasks;
                FetchOutcome::Applied
            }
            Err(err) => {
                warn!(token = ticket.token, error = %err, "Fetching tasks failed");
                self.error = Some(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Fetch the current filter from `source` and apply the result
    pub async fn refresh<S: TaskSource + ?Sized>(&mut self, source: &S) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = source.fetch_tasks(ticket.category(), ticket.take()).await;
        self.complete_fetch(ticket, result)
    }

    /// Switch to `category` and fetch it if it differs from the current one
    ///
    /// Returns `None` when the category was unchanged and nothing was fetched.
    pub async fn select_category<S: TaskSource + ?Sized>(
        &mut self,
        source: &S,
        category: Option<String>,
    ) -> Option<FetchOutcome> {
        if !self.set_category(category) {
            return None;
        }
        Some(self.refresh(source).await)
    }

    /// Discard the local list's authority and refetch the current filter
    pub async fn invalidate<S: TaskSource + ?Sized>(&mut self, source: &S) -> FetchOutcome {
        debug!(category = ?self.category, "Invalidating task cache");
        self.refresh(source).await
    }

    /// Replace the cached entry with the same id as `task`
    ///
    /// Position is preserved and nothing is refetched. Returns `false` when
    /// no cached entry has that id, in which case the cache is unchanged.
    pub fn merge(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|cached| cached.id == task.id) {
            Some(cached) => {
                *cached = task;
                true
            }
            None => {
                debug!(task_id = %task.id, "Merged task is not in the cached list");
                false
            }
        }
    }
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.is_empty())
}
