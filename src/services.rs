//! Backend Service Wrappers
//!
//! Frontend bindings to the LibTask REST API, organized by domain. Each
//! wrapper builds a client over `localStorage`, flattens errors to a message
//! and drops the session when the backend answers 401.

use std::rc::Rc;

use leptos::prelude::Write;

use libtask_client::domain::{
    NewTask, ReportFilters, Role, StatusUpdate, Tag, Task, TaskStatus,
};
use libtask_client::guard::{self, Access};
use libtask_client::{
    ApiClient, ApiError, ApiResult, AuthResolver, Profile, ReportBundle, ReqwestTransport,
    Session, TaskStore, TokenStore,
};
use tracing::warn;

use crate::browser::{client_config, BrowserStorage};
use crate::context::SessionContext;
use crate::store::{store_add_tag, store_remove_tag, AppStateStoreFields, AppStore, AppTaskCache};

pub const REPORT_ACCESS_HINT: &str = "Check that you are logged in as an admin.";

fn api_client() -> ApiClient {
    ApiClient::new(
        client_config(),
        Rc::new(ReqwestTransport::new()),
        TokenStore::new(Rc::new(BrowserStorage)),
    )
}

fn task_store(store: AppStore) -> TaskStore<AppTaskCache> {
    TaskStore::new(api_client(), AppTaskCache(store))
}

fn flatten<T>(session: &SessionContext, result: ApiResult<T>) -> Result<T, String> {
    result.map_err(|err| {
        if err.is_unauthorized() {
            session.invalidate();
        }
        err.to_string()
    })
}

// ========================
// Session
// ========================

/// Session implied by whatever token survived the last page load
pub fn restore_session() -> Session {
    AuthResolver::new(api_client()).session()
}

/// Log in and resolve the role. Nothing is kept unless both succeed.
pub async fn sign_in(session: SessionContext, email: String, password: String) -> Result<Profile, String> {
    let auth = AuthResolver::new(api_client());
    match auth.sign_in_and_resolve(&email, &password).await {
        Ok(profile) => {
            session.replace(auth.session());
            Ok(profile)
        }
        Err(err) => {
            auth.sign_out();
            session.replace(Session::Anonymous);
            Err(err.to_string())
        }
    }
}

pub fn sign_out(session: SessionContext) {
    AuthResolver::new(api_client()).sign_out();
    session.replace(Session::Anonymous);
}

/// Resolve the caller's role against the backend and decide access.
pub async fn check_access(session: SessionContext, required: Role) -> Access {
    let auth = AuthResolver::new(api_client());
    if !auth.session().is_authenticated() {
        session.invalidate();
        return Access::Denied;
    }

    let resolved = auth.get_my_role().await;
    if let Err(err) = &resolved {
        warn!(%err, "role resolution failed");
    }
    session.replace(auth.session());
    guard::evaluate(required, &resolved)
}

// ========================
// Tasks
// ========================

pub async fn load_tasks(session: SessionContext, store: AppStore) -> Result<Vec<Task>, String> {
    flatten(&session, task_store(store).list().await)
}

pub async fn create_task(session: SessionContext, store: AppStore, input: NewTask) -> Result<Task, String> {
    flatten(&session, task_store(store).create(input).await)
}

pub async fn reassign_task(
    session: SessionContext,
    store: AppStore,
    task_id: String,
    assigned_to: String,
) -> Result<Task, String> {
    flatten(&session, task_store(store).reassign(&task_id, &assigned_to).await)
}

pub async fn update_status(
    session: SessionContext,
    store: AppStore,
    task_id: String,
    status: TaskStatus,
    note: Option<String>,
) -> Result<StatusUpdate, String> {
    let result = task_store(store)
        .update_status(&task_id, status, note.as_deref())
        .await;
    flatten(&session, result)
}

/// One task, refreshed in the store; staff may only open their own.
pub async fn fetch_task(session: SessionContext, store: AppStore, task_id: String) -> Result<Task, String> {
    flatten(&session, task_store(store).fetch(&task_id).await)
}

pub async fn task_history(
    session: SessionContext,
    store: AppStore,
    task_id: String,
) -> Result<Vec<StatusUpdate>, String> {
    flatten(&session, task_store(store).history(&task_id).await)
}

// ========================
// Staff & Tags
// ========================

pub async fn load_staff(session: SessionContext, store: AppStore) -> Result<(), String> {
    let staff = flatten(&session, api_client().list_staff().await)?;
    *store.staff().write() = staff;
    Ok(())
}

pub async fn load_tags(session: SessionContext, store: AppStore) -> Result<(), String> {
    let tags = flatten(&session, api_client().list_tags().await)?;
    *store.tags().write() = tags;
    Ok(())
}

pub async fn create_tag(session: SessionContext, store: AppStore, name: String) -> Result<Tag, String> {
    let tag = flatten(&session, api_client().create_tag(&name).await)?;
    store_add_tag(&store, tag.clone());
    Ok(tag)
}

pub async fn delete_tag(session: SessionContext, store: AppStore, tag_id: String) -> Result<(), String> {
    flatten(&session, api_client().delete_tag(&tag_id).await)?;
    store_remove_tag(&store, &tag_id);
    Ok(())
}

/// Tasks, staff and tags together, as every area needs on entry.
pub async fn load_all(session: SessionContext, store: AppStore) -> Result<(), String> {
    load_tasks(session, store).await?;
    // Staff and tags only decorate the task list
    if let Err(e) = load_staff(session, store).await {
        warn!(error = %e, "staff list unavailable");
    }
    if let Err(e) = load_tags(session, store).await {
        warn!(error = %e, "tag list unavailable");
    }
    Ok(())
}

// ========================
// Reports
// ========================

fn report_error(err: &ApiError) -> String {
    if err.is_access_denied() {
        format!("{} {}", err, REPORT_ACCESS_HINT)
    } else {
        err.to_string()
    }
}

/// All three summaries for one window, or one message if any load failed.
pub async fn load_reports(session: SessionContext, filters: ReportFilters) -> Result<ReportBundle, String> {
    api_client().load_reports(filters).await.map_err(|err| {
        if err.is_unauthorized() {
            session.invalidate();
        }
        report_error(&err)
    })
}
