//! Task Card Component
//!
//! One task with its assignee, due date, tags and live status. Editable
//! cards record status changes and reassignments through the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libtask_client::domain::{find_by_id, staff_name, Role, Task, TaskStatus};

use super::StatusSelector;
use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskCard(task: Task, #[prop(optional)] editable: bool) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (note, set_note) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let task_id = task.id.clone();
    let status = Memo::new(move |_| {
        store
            .tasks()
            .with(|tasks| find_by_id(tasks, &task_id).and_then(|t| t.status.clone()))
    });

    let task_id = task.id.clone();
    let initial_assignee = task.assigned_to.clone();
    let assignee_name = move || {
        let assignee = store
            .tasks()
            .with(|tasks| find_by_id(tasks, &task_id).map(|t| t.assigned_to.clone()))
            .unwrap_or_else(|| initial_assignee.clone());
        store
            .staff()
            .with(|staff| staff_name(staff, &assignee).to_string())
    };

    let task_id = task.id.clone();
    let on_status = move |next: TaskStatus| {
        let task_id = task_id.clone();
        let note_text = Some(note.get_untracked()).filter(|n| !n.trim().is_empty());
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match services::update_status(session, store, task_id, next, note_text).await {
                Ok(_) => set_note.set(String::new()),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let task_id = task.id.clone();
    let on_reassign = move |ev: web_sys::Event| {
        let assigned_to = event_target_value(&ev);
        if assigned_to.is_empty() {
            return;
        }
        let task_id = task_id.clone();
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(e) = services::reassign_task(session, store, task_id, assigned_to).await {
                set_error.set(Some(e));
            }
            set_saving.set(false);
        });
    };

    let due = task
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "No due date".to_string());

    view! {
        <div class="task-card">
            <div class="task-card-header">
                <span class="task-title">{task.title.clone()}</span>
                <span class=move || {
                    if TaskStatus::closed(status.get().as_ref()) { "status-badge closed" } else { "status-badge" }
                }>
                    {move || status.get().map(|s| s.display_label().to_string()).unwrap_or_else(|| "Unknown".to_string())}
                </span>
            </div>
            {task.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
            <div class="task-meta">
                <span>"Assigned to: " {assignee_name}</span>
                <span>"Due: " {due}</span>
                <span class="task-id">"#" {task.id.clone()}</span>
            </div>
            {(!task.tags.is_empty()).then(|| view! {
                <div class="task-tags">
                    {task.tags.iter().map(|tag| view! { <span class="tag-chip">{tag.clone()}</span> }).collect_view()}
                </div>
            })}
            <Show when=move || editable>
                <div class="task-status-edit">
                    <StatusSelector current=status on_change=on_status.clone() disabled=saving />
                    <input
                        type="text"
                        class="status-note"
                        placeholder="Note (optional)"
                        prop:value=move || note.get()
                        on:input=move |ev| set_note.set(event_target_value(&ev))
                    />
                    <select class="reassign" prop:disabled=move || saving.get() on:change=on_reassign.clone()>
                        <option value="">"Reassign to..."</option>
                        {move || store.staff().with(|staff| staff.iter().filter(|p| p.role == Role::Staff).map(|p| view! {
                            <option value=p.id.clone()>{p.display_name().to_string()}</option>
                        }).collect_view())}
                    </select>
                    {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                </div>
            </Show>
        </div>
    }
}
