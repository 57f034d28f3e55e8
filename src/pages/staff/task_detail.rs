//! Staff Task Detail
//!
//! One assigned task with its status history, loaded fresh from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use libtask_client::domain::{find_by_id, StatusUpdate};

use crate::components::{ErrorBanner, StatusHistory, TaskCard};
use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StaffTaskDetail() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let params = use_params_map();
    let task_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let (history, set_history) = signal(Vec::<StatusUpdate>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = task_id.get();
        set_history.set(Vec::new());
        set_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            let loaded = match services::fetch_task(session, store, id.clone()).await {
                Ok(_) => services::task_history(session, store, id.clone()).await,
                Err(e) => Err(e),
            };
            if task_id.get_untracked() != id {
                return;
            }
            match loaded {
                Ok(items) => set_history.set(items),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let task = Memo::new(move |_| {
        let id = task_id.get();
        store.tasks().with(|tasks| find_by_id(tasks, &id).cloned())
    });

    view! {
        <section class="task-detail">
            <A href="/staff/tasks">"Back to my tasks"</A>
            <h2>"Task details"</h2>
            <ErrorBanner message=error />
            <Show when=move || !loading.get() && error.with(Option::is_none) fallback=move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })>
                {move || task.get().map(|task| view! { <TaskCard task=task /> })}
                <h3>"Status history"</h3>
                <StatusHistory history=history />
            </Show>
        </section>
    }
}
