//! Route Guard
//!
//! Decides whether a protected area may render for the current session.

use crate::auth::AuthResolver;
use crate::domain::Role;
use crate::error::ApiResult;

pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Role resolution still pending; render the interstitial only.
    Checking,
    Granted(Role),
    /// Redirect to the login route, replacing history.
    Denied,
}

impl Access {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Access::Denied => Some(LOGIN_ROUTE),
            _ => None,
        }
    }
}

/// Map a role resolution outcome onto an access decision.
pub fn evaluate(required: Role, resolved: &ApiResult<Role>) -> Access {
    match resolved {
        Ok(role) if role.grants(required) => Access::Granted(*role),
        _ => Access::Denied,
    }
}

/// Resolve the caller's role and decide.
pub async fn check_access(auth: &AuthResolver, required: Role) -> Access {
    let resolved = auth.get_my_role().await;
    evaluate(required, &resolved)
}
