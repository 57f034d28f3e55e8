//! Task Endpoints

use serde::{Deserialize, Serialize};

use super::{path_segment, ApiClient};
use crate::domain::{NewTask, Task};
use crate::error::ApiResult;

#[derive(Deserialize)]
struct TaskList {
    #[serde(default)]
    items: Vec<Task>,
}

#[derive(Serialize)]
struct ReassignArgs<'a> {
    assigned_to: &'a str,
}

impl ApiClient {
    /// `GET /tasks`
    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let list: Option<TaskList> = self.get("/tasks").await?;
        Ok(list.map(|l| l.items).unwrap_or_default())
    }

    /// `POST /tasks`; the server assigns the id.
    pub async fn create_task(&self, input: &NewTask) -> ApiResult<Task> {
        self.post("/tasks", input).await
    }

    /// `GET /tasks/:id`; staff may only read tasks assigned to them.
    pub async fn get_task(&self, task_id: &str) -> ApiResult<Task> {
        self.get(&format!("/tasks/{}", path_segment(task_id))).await
    }

    /// `PATCH /tasks/:id` with a new assignee. Admin only.
    pub async fn reassign_task(&self, task_id: &str, assigned_to: &str) -> ApiResult<Task> {
        let path = format!("/tasks/{}", path_segment(task_id));
        self.patch(&path, &ReassignArgs { assigned_to }).await
    }
}
