//! Staff Task List
//!
//! The signed-in user's tasks grouped by due day. Status changes are made
//! by an admin, so the cards here are read-only.

use leptos::prelude::*;
use leptos_router::components::A;
use libtask_client::agenda::group_by_due_day;
use libtask_client::task_store::tasks_assigned_to;

use crate::components::TaskCard;
use crate::context::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StaffTasks() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let groups = Memo::new(move |_| {
        let user_id = session.user_id().unwrap_or_default();
        store
            .tasks()
            .with(|tasks| group_by_due_day(&tasks_assigned_to(tasks, &user_id)))
    });

    view! {
        <section class="task-list">
            <h2>"My tasks"</h2>
            <Show when=move || groups.with(|g| !g.is_empty()) fallback=|| view! { <p class="empty">"No tasks assigned to you."</p> }>
                <For
                    each=move || groups.get()
                    key=|group| (group.label.clone(), group.tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>())
                    children=move |group| view! {
                        <div class="day-group">
                            <h3>{group.label.clone()}</h3>
                            {group.tasks.into_iter().map(|task| {
                                let href = format!("/staff/tasks/{}", task.id);
                                view! {
                                    <div class="task-entry">
                                        <TaskCard task=task />
                                        <A href=href>"View details"</A>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                />
            </Show>
        </section>
    }
}
