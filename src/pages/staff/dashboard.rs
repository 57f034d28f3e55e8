//! Staff Dashboard
//!
//! Open and closed counts over the signed-in user's own tasks.

use leptos::prelude::*;
use libtask_client::domain::ReportFilters;
use libtask_client::reports::summarize_tasks;
use libtask_client::task_store::tasks_assigned_to;

use crate::context::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StaffDashboard() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let summary = Memo::new(move |_| {
        let user_id = session.user_id().unwrap_or_default();
        let mine = store.tasks().with(|tasks| tasks_assigned_to(tasks, &user_id));
        summarize_tasks(&mine, &ReportFilters::default())
    });

    view! {
        <section class="dashboard">
            <h2>"My work"</h2>
            <div class="stat-row">
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.total_tasks)}</span>"Total"</div>
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.open_tasks)}</span>"Open"</div>
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.closed_tasks)}</span>"Closed"</div>
            </div>
        </section>
    }
}
