//! Tag Endpoints

use serde::Serialize;

use super::{path_segment, ApiClient};
use crate::domain::Tag;
use crate::error::{ApiError, ApiResult};

#[derive(Serialize)]
struct CreateTagArgs<'a> {
    name: &'a str,
}

impl ApiClient {
    /// `GET /tags`
    pub async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        let tags: Option<Vec<Tag>> = self.get("/tags").await?;
        Ok(tags.unwrap_or_default())
    }

    /// `POST /tags`
    pub async fn create_tag(&self, name: &str) -> ApiResult<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Tag name is required.".to_string()));
        }
        self.post("/tags", &CreateTagArgs { name }).await
    }

    /// `DELETE /tags/:id`
    pub async fn delete_tag(&self, tag_id: &str) -> ApiResult<()> {
        self.delete(&format!("/tags/{}", path_segment(tag_id))).await
    }
}
