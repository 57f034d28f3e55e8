//! Auth Resolver
//!
//! Exchanges credentials for a bearer token and resolves the caller's
//! application role from the `/me` profile.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::api::ApiClient;
use crate::domain::{LoginResponse, Role};
use crate::error::{ApiError, ApiResult};

pub const NO_ROLE_MESSAGE: &str = "Your account does not have an assigned role.";
pub const MISSING_TOKEN_MESSAGE: &str = "Login failed: missing access token.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your email and password.";

/// Resolved identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

/// Session state of this browser tab
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        /// `None` until the role has been resolved
        profile: Option<Profile>,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Authenticated {
                profile: Some(profile),
                ..
            } => Some(profile.role),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::Authenticated { profile, .. } => profile.as_ref(),
            Session::Anonymous => None,
        }
    }
}

#[derive(Clone)]
pub struct AuthResolver {
    api: ApiClient,
    profile: Rc<RefCell<Option<Profile>>>,
}

impl AuthResolver {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            profile: Rc::new(RefCell::new(None)),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Current session; an absent token always means anonymous.
    pub fn session(&self) -> Session {
        match self.api.tokens().get_token() {
            Some(token) => Session::Authenticated {
                token,
                profile: self.profile.borrow().clone(),
            },
            None => {
                self.profile.borrow_mut().take();
                Session::Anonymous
            }
        }
    }

    /// Log in and store the returned token.
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(MISSING_CREDENTIALS_MESSAGE.to_string()));
        }

        self.profile.borrow_mut().take();
        let response = self.api.login(email, password).await?;
        let token = response
            .access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Auth(MISSING_TOKEN_MESSAGE.to_string()))?;

        self.api.tokens().set_token(token);
        info!(email, "signed in");
        Ok(response)
    }

    /// Fetch `/me` and derive the profile from `db_role`.
    ///
    /// Token claims are never consulted: they carry the auth provider's role,
    /// not the application's.
    pub async fn resolve_profile(&self) -> ApiResult<Profile> {
        let me = match self.api.me().await {
            Ok(me) => me,
            Err(err) => {
                self.profile.borrow_mut().take();
                return Err(err);
            }
        };

        let Some(role) = me.db_role.as_deref().and_then(|raw| raw.parse::<Role>().ok()) else {
            self.profile.borrow_mut().take();
            return Err(ApiError::Auth(NO_ROLE_MESSAGE.to_string()));
        };

        let profile = Profile {
            user_id: me.user_id,
            email: me.email,
            role,
        };
        *self.profile.borrow_mut() = Some(profile.clone());
        info!(role = %role, "role resolved");
        Ok(profile)
    }

    pub async fn get_my_role(&self) -> ApiResult<Role> {
        self.resolve_profile().await.map(|profile| profile.role)
    }

    /// `sign_in` followed by `resolve_profile`, as the login form does.
    pub async fn sign_in_and_resolve(&self, email: &str, password: &str) -> ApiResult<Profile> {
        self.sign_in(email, password).await?;
        self.resolve_profile().await
    }

    /// Drop the session. Safe to call repeatedly.
    pub fn sign_out(&self) {
        self.api.tokens().clear_token();
        self.profile.borrow_mut().take();
        info!("signed out");
    }
}
