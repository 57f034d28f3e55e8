//! Reports Page
//!
//! Task, staff and tag summaries for a date window, fetched from the
//! backend. A newer window supersedes a load still in flight.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use libtask_client::domain::{staff_name, ReportFilters, Role};
use libtask_client::reports::{PieChart, RequestSequence};
use libtask_client::ReportBundle;

use crate::components::{ErrorBanner, PieBreakdown};
use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

fn parse_bound(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Summaries and error to show once a load finishes. A failed load clears
/// the summaries so an old window never sits under the new filter inputs.
fn settle(result: Result<ReportBundle, String>) -> (Option<ReportBundle>, Option<String>) {
    match result {
        Ok(loaded) => (Some(loaded), None),
        Err(e) => (None, Some(e)),
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let sequence = RequestSequence::new();

    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (filters, set_filters) = signal(ReportFilters::default());
    let (bundle, set_bundle) = signal::<Option<ReportBundle>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected_staff, set_selected_staff) = signal(String::new());

    Effect::new(move |_| {
        let filters = filters.get();
        let request = sequence.track(services::load_reports(session, filters));
        set_loading.set(true);
        spawn_local(async move {
            // `None` means a newer window was requested meanwhile
            let Some(result) = request.await else {
                return;
            };
            let (shown, message) = settle(result);
            set_bundle.set(shown);
            set_error.set(message);
            set_loading.set(false);
        });
    });

    let on_apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_filters.set(ReportFilters::new(
            parse_bound(&start.get_untracked()),
            parse_bound(&end.get_untracked()),
        ));
    };

    let on_reset = move |_| {
        set_start.set(String::new());
        set_end.set(String::new());
        set_selected_staff.set(String::new());
        set_filters.set(ReportFilters::default());
    };

    let chart = Signal::derive(move || {
        let selected = selected_staff.get();
        bundle.with(|b| {
            PieChart::for_staff(
                Some(selected.as_str()),
                b.as_ref().map(|b| &b.staff),
            )
        })
    });

    let name_of = move |id: &str| store.staff().with(|staff| staff_name(staff, id).to_string());

    view! {
        <section class="reports">
            <h2>"Reports"</h2>
            <form class="report-filters" on:submit=on_apply>
                <label>
                    "From"
                    <input type="date" prop:value=move || start.get() on:input=move |ev| set_start.set(event_target_value(&ev)) />
                </label>
                <label>
                    "To"
                    <input type="date" prop:value=move || end.get() on:input=move |ev| set_end.set(event_target_value(&ev)) />
                </label>
                <button type="submit">"Apply"</button>
                <button type="button" class="secondary" on:click=on_reset>"Reset"</button>
                <Show when=move || loading.get()>
                    <span class="loading">"Loading..."</span>
                </Show>
            </form>

            <ErrorBanner message=error />

            {move || bundle.get().map(|b| view! {
                <div class="report-grid">
                    <div class="report-card">
                        <h3>"Tasks"</h3>
                        <p>{format!("{} total, {} open, {} closed", b.tasks.total_tasks, b.tasks.open_tasks, b.tasks.closed_tasks)}</p>
                        <table class="summary-table">
                            <thead><tr><th>"Status"</th><th>"Count"</th></tr></thead>
                            <tbody>
                                {b.tasks.by_status.iter().map(|row| view! {
                                    <tr><td>{row.label.clone()}</td><td>{row.count}</td></tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <div class="report-card">
                        <h3>"By staff"</h3>
                        <table class="summary-table">
                            <thead><tr><th>"Staff"</th><th>"Total"</th><th>"Open"</th><th>"Closed"</th></tr></thead>
                            <tbody>
                                {b.staff.items.iter().map(|row| {
                                    let id = row.staff_id.clone();
                                    let row_id = row.staff_id.clone();
                                    view! {
                                    <tr
                                        class="selectable"
                                        class:selected=move || selected_staff.with(|s| *s == row_id)
                                        title="Click to select staff"
                                        on:click=move |_| set_selected_staff.set(id.clone())
                                    >
                                        <td>{name_of(&row.staff_id)}</td>
                                        <td>{row.total_tasks}</td>
                                        <td>{row.open_tasks}</td>
                                        <td>{row.closed_tasks}</td>
                                    </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <div class="report-card">
                        <h3>"Tags"</h3>
                        <table class="summary-table">
                            <thead><tr><th>"Tag"</th><th>"Tasks"</th></tr></thead>
                            <tbody>
                                {b.tags.items.iter().map(|row| view! {
                                    <tr><td>{row.tag.clone()}</td><td>{row.total_tasks}</td></tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            })}

            <div class="report-card">
                <h3>"Open vs closed"</h3>
                <select
                    prop:value=move || selected_staff.get()
                    on:change=move |ev| set_selected_staff.set(event_target_value(&ev))
                >
                    <option value="">"Select staff"</option>
                    {move || store.staff().with(|staff| staff.iter().filter(|p| p.role == Role::Staff).map(|p| view! {
                        <option value=p.id.clone()>{p.display_name().to_string()}</option>
                    }).collect_view())}
                </select>
                <PieBreakdown chart=chart />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libtask_client::reports::summarize_all;

    #[test]
    fn test_failed_load_clears_previous_summaries() {
        let (shown, message) = settle(Err("Admin access required.".to_string()));
        assert_eq!(shown, None);
        assert_eq!(message.as_deref(), Some("Admin access required."));
    }

    #[test]
    fn test_successful_load_clears_error() {
        let bundle = summarize_all(&[], ReportFilters::default());
        let (shown, message) = settle(Ok(bundle.clone()));
        assert_eq!(shown, Some(bundle));
        assert_eq!(message, None);
    }

    #[test]
    fn test_bounds_parse_iso_days() {
        assert_eq!(parse_bound(" 2026-02-01 "), NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(parse_bound(""), None);
    }
}
