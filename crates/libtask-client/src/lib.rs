//! LibTask Client
//!
//! Platform-neutral core of the LibTask front end: the domain model, the
//! authenticated API client, session and role resolution, the route guard,
//! the task store and report aggregation. The browser UI builds on top of it.

pub mod agenda;
pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod guard;
pub mod reports;
pub mod task_store;
pub mod token_store;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ReportBundle};
pub use auth::{AuthResolver, Profile, Session};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use guard::Access;
pub use task_store::{TaskCache, TaskStore};
pub use token_store::{TokenStorage, TokenStore};
pub use transport::{ReqwestTransport, Transport};
