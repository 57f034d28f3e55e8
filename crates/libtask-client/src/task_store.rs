//! Task Store
//!
//! Task operations against the backend with a client-side cache. The
//! server is authoritative: the cache only changes after a call succeeds.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::api::ApiClient;
use crate::domain::{self, NewTask, StatusUpdate, Task, TaskStatus};
use crate::error::{ApiError, ApiResult};

pub const NOTE_MAX_CHARS: usize = 1000;

/// Where the store keeps its copy of the task list
pub trait TaskCache {
    fn replace_all(&self, tasks: Vec<Task>);
    fn upsert(&self, task: Task);
    fn set_status(&self, task_id: &str, status: TaskStatus);
    fn snapshot(&self) -> Vec<Task>;
}

/// Plain in-memory cache; clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskCache {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl TaskCache for MemoryTaskCache {
    fn replace_all(&self, tasks: Vec<Task>) {
        *self.tasks.borrow_mut() = tasks;
    }

    fn upsert(&self, task: Task) {
        domain::upsert(&mut self.tasks.borrow_mut(), task);
    }

    fn set_status(&self, task_id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|t| t.id == task_id) {
            task.status = Some(status);
        }
    }

    fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }
}

/// Tasks assigned to one staff member
pub fn tasks_assigned_to(tasks: &[Task], user_id: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.assigned_to == user_id)
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct TaskStore<C: TaskCache = MemoryTaskCache> {
    api: ApiClient,
    cache: C,
}

impl TaskStore<MemoryTaskCache> {
    pub fn in_memory(api: ApiClient) -> Self {
        Self::new(api, MemoryTaskCache::default())
    }
}

impl<C: TaskCache> TaskStore<C> {
    pub fn new(api: ApiClient, cache: C) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cached tasks
    pub fn tasks(&self) -> Vec<Task> {
        self.cache.snapshot()
    }

    pub fn get(&self, task_id: &str) -> Option<Task> {
        domain::find_by_id(&self.cache.snapshot(), task_id).cloned()
    }

    pub fn assigned_to(&self, user_id: &str) -> Vec<Task> {
        tasks_assigned_to(&self.cache.snapshot(), user_id)
    }

    /// Reload the task list from the backend.
    pub async fn list(&self) -> ApiResult<Vec<Task>> {
        let tasks = self.api.list_tasks().await?;
        self.cache.replace_all(tasks.clone());
        Ok(tasks)
    }

    /// Create a task; the returned record carries the server-assigned id.
    pub async fn create(&self, input: NewTask) -> ApiResult<Task> {
        let input = input.normalized().map_err(ApiError::Validation)?;
        let task = self.api.create_task(&input).await?;
        info!(task_id = %task.id, "task created");
        self.cache.upsert(task.clone());
        Ok(task)
    }

    /// Fetch one task and refresh its cached copy.
    pub async fn fetch(&self, task_id: &str) -> ApiResult<Task> {
        let task = self.api.get_task(task_id).await?;
        self.cache.upsert(task.clone());
        Ok(task)
    }

    /// Hand a task to another staff member; the cache follows the server's copy.
    pub async fn reassign(&self, task_id: &str, assigned_to: &str) -> ApiResult<Task> {
        let assigned_to = assigned_to.trim();
        if assigned_to.is_empty() {
            return Err(ApiError::Validation(
                "Choose a staff member to assign the task to.".to_string(),
            ));
        }
        let task = self.api.reassign_task(task_id, assigned_to).await?;
        info!(task_id, assigned_to, "task reassigned");
        self.cache.upsert(task.clone());
        Ok(task)
    }

    /// Record a status change through `/status`.
    ///
    /// The cached task is updated only once the backend accepts the change;
    /// a rejected change leaves it as it was.
    pub async fn update_status(
        &self,
        task_id: &str,
        status: TaskStatus,
        note: Option<&str>,
    ) -> ApiResult<StatusUpdate> {
        let note = note.map(str::trim).filter(|n| !n.is_empty());
        if note.is_some_and(|n| n.chars().count() > NOTE_MAX_CHARS) {
            return Err(ApiError::Validation(format!(
                "Note must be at most {} characters.",
                NOTE_MAX_CHARS
            )));
        }

        let update = self.api.add_status_update(task_id, &status, note).await?;
        info!(task_id, status = %update.status, "task status updated");
        self.cache.set_status(task_id, update.status.clone());
        Ok(update)
    }

    /// Status history of one task, newest first as served.
    pub async fn history(&self, task_id: &str) -> ApiResult<Vec<StatusUpdate>> {
        self.api.list_status_updates(task_id).await
    }
}
