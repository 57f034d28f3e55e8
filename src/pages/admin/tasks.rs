//! Admin Task List
//!
//! Every task, searchable and filterable by status, grouped by due day.

use leptos::prelude::*;
use libtask_client::agenda::{filter_tasks, group_by_due_day};
use libtask_client::domain::{TaskStatus, CANONICAL_STATUSES};

use crate::components::TaskCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AdminTasks() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());

    let groups = Memo::new(move |_| {
        let status = Some(status_filter.get())
            .filter(|s| !s.is_empty())
            .map(|s| TaskStatus::parse(&s));
        let query = query.get();
        store
            .tasks()
            .with(|tasks| group_by_due_day(&filter_tasks(tasks, &query, status.as_ref())))
    });

    view! {
        <section class="task-list">
            <h2>"Tasks"</h2>
            <div class="task-filters">
                <input
                    type="search"
                    placeholder="Search by id, title or description"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {CANONICAL_STATUSES.iter().map(|s| view! {
                        <option value=s.as_str().to_string()>{s.display_label().to_string()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || groups.with(|g| !g.is_empty()) fallback=|| view! { <p class="empty">"No matching tasks."</p> }>
                <For
                    each=move || groups.get()
                    key=|group| (group.label.clone(), group.tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>())
                    children=move |group| view! {
                        <div class="day-group">
                            <h3>{group.label.clone()}</h3>
                            {group.tasks.into_iter().map(|task| view! { <TaskCard task=task editable=true /> }).collect_view()}
                        </div>
                    }
                />
            </Show>
        </section>
    }
}
