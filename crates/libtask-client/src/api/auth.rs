//! Auth Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::domain::{LoginResponse, Me};
use crate::error::ApiResult;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let response: Option<LoginResponse> = self
            .post("/auth/login", &LoginArgs { email, password })
            .await?;
        Ok(response.unwrap_or_default())
    }

    /// `GET /me`
    pub async fn me(&self) -> ApiResult<Me> {
        let me: Option<Me> = self.get("/me").await?;
        Ok(me.unwrap_or_default())
    }
}
