//! Admin Dashboard
//!
//! Library-wide counts plus the per-staff breakdown, computed from the
//! loaded task list.

use leptos::prelude::*;
use libtask_client::domain::{staff_name, ReportFilters};
use libtask_client::reports::{summarize_by_staff, summarize_tasks};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = use_app_store();

    let summary = Memo::new(move |_| {
        store
            .tasks()
            .with(|tasks| summarize_tasks(tasks, &ReportFilters::default()))
    });
    let by_staff = Memo::new(move |_| {
        store
            .tasks()
            .with(|tasks| summarize_by_staff(tasks, &ReportFilters::default()).items)
    });

    view! {
        <section class="dashboard">
            <h2>"Overview"</h2>
            <div class="stat-row">
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.total_tasks)}</span>"Total"</div>
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.open_tasks)}</span>"Open"</div>
                <div class="stat"><span class="stat-value">{move || summary.with(|s| s.closed_tasks)}</span>"Closed"</div>
            </div>

            <h3>"By staff"</h3>
            <table class="summary-table">
                <thead>
                    <tr><th>"Staff"</th><th>"Total"</th><th>"Open"</th><th>"Closed"</th></tr>
                </thead>
                <tbody>
                    {move || by_staff.get().into_iter().map(|row| {
                        let name = store.staff().with(|staff| staff_name(staff, &row.staff_id).to_string());
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{row.total_tasks}</td>
                                <td>{row.open_tasks}</td>
                                <td>{row.closed_tasks}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
