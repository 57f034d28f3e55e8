//! Audit Trail
//!
//! Status history of a chosen task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libtask_client::domain::StatusUpdate;

use crate::components::{ErrorBanner, StatusHistory};
use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AuditTrail() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (task_id, set_task_id) = signal(String::new());
    let (history, set_history) = signal(Vec::<StatusUpdate>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = task_id.get();
        set_history.set(Vec::new());
        set_error.set(None);
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match services::task_history(session, store, id.clone()).await {
                // Ignore answers for a task that is no longer selected
                Ok(items) if task_id.get_untracked() == id => set_history.set(items),
                Err(e) if task_id.get_untracked() == id => set_error.set(Some(e)),
                _ => {}
            }
        });
    });

    view! {
        <section class="audit-trail">
            <h2>"Audit trail"</h2>
            <select
                prop:value=move || task_id.get()
                on:change=move |ev| set_task_id.set(event_target_value(&ev))
            >
                <option value="">"Select a task"</option>
                {move || store.tasks().with(|tasks| tasks.iter().map(|task| view! {
                    <option value=task.id.clone()>{format!("#{} {}", task.id, task.title)}</option>
                }).collect_view())}
            </select>

            <ErrorBanner message=error />

            <Show when=move || !task_id.get().is_empty()>
                <StatusHistory history=history />
            </Show>
        </section>
    }
}
