//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! doubles as the task store's cache, so successful API calls land here.

use leptos::prelude::*;
use libtask_client::domain::{self, StaffProfile, Tag, Task, TaskStatus};
use libtask_client::TaskCache;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks as last served by the backend
    pub tasks: Vec<Task>,
    /// Staff profiles, for assignee names and pickers
    pub staff: Vec<StaffProfile>,
    /// All tags
    pub tags: Vec<Tag>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Insert a task or replace the one with the same id
pub fn store_upsert_task(store: &AppStore, task: Task) {
    domain::upsert(&mut store.tasks().write(), task);
}

/// Set the status of a task by ID
pub fn store_set_task_status(store: &AppStore, task_id: &str, status: TaskStatus) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == task_id) {
        task.status = Some(status);
    }
}

/// Add a tag to the store
pub fn store_add_tag(store: &AppStore, tag: Tag) {
    domain::upsert(&mut store.tags().write(), tag);
}

/// Remove a tag from the store
pub fn store_remove_tag(store: &AppStore, tag_id: &str) {
    store.tags().write().retain(|tag| tag.id != tag_id);
}

/// Task cache backed by the app store
#[derive(Clone, Copy)]
pub struct AppTaskCache(pub AppStore);

impl TaskCache for AppTaskCache {
    fn replace_all(&self, tasks: Vec<Task>) {
        *self.0.tasks().write() = tasks;
    }

    fn upsert(&self, task: Task) {
        store_upsert_task(&self.0, task);
    }

    fn set_status(&self, task_id: &str, status: TaskStatus) {
        store_set_task_status(&self.0, task_id, status);
    }

    fn snapshot(&self) -> Vec<Task> {
        self.0.tasks().read_untracked().clone()
    }
}
