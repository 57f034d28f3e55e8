//! Authentication payloads

use serde::{Deserialize, Serialize};

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Response of `GET /me`
///
/// `db_role` is the application role. The provider-level claims
/// (`app_role`, `jwt_role`) are usually just "authenticated" and are never
/// used for routing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Me {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub db_role: Option<String>,
    #[serde(default)]
    pub app_role: Option<String>,
    #[serde(default)]
    pub jwt_role: Option<String>,
}
