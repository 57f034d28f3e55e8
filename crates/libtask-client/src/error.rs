//! Client error taxonomy

use serde_json::Value;
use thiserror::Error;

/// Common result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Value,
    },
    /// Login or role check could not establish a usable session
    #[error("{0}")]
    Auth(String),
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
    /// A response arrived but did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Input rejected before anything was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// 401 or 403
    pub fn is_access_denied(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
