//! Status Endpoints

use serde::{Deserialize, Serialize};

use super::{path_segment, ApiClient};
use crate::domain::{StatusUpdate, TaskStatus};
use crate::error::ApiResult;

#[derive(Serialize)]
struct StatusUpdateArgs<'a> {
    task_id: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

#[derive(Deserialize)]
struct StatusList {
    #[serde(default)]
    items: Vec<StatusUpdate>,
}

impl ApiClient {
    /// `GET /status/:task_id`
    pub async fn list_status_updates(&self, task_id: &str) -> ApiResult<Vec<StatusUpdate>> {
        let path = format!("/status/{}", path_segment(task_id));
        let list: Option<StatusList> = self.get(&path).await?;
        Ok(list.map(|l| l.items).unwrap_or_default())
    }

    /// `POST /status`. The backend restricts this to admins.
    pub async fn add_status_update(
        &self,
        task_id: &str,
        status: &TaskStatus,
        note: Option<&str>,
    ) -> ApiResult<StatusUpdate> {
        let args = StatusUpdateArgs {
            task_id,
            status: status.update_label(),
            note,
        };
        self.post("/status", &args).await
    }
}
