//! Staff Endpoints

use super::ApiClient;
use crate::domain::StaffProfile;
use crate::error::ApiResult;

impl ApiClient {
    /// `GET /staff`
    pub async fn list_staff(&self) -> ApiResult<Vec<StaffProfile>> {
        let staff: Option<Vec<StaffProfile>> = self.get("/staff").await?;
        Ok(staff.unwrap_or_default())
    }
}
