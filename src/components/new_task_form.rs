//! New Task Form Component
//!
//! Form for creating a task and assigning it to a staff member.

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use libtask_client::domain::{NewTask, Role};

use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

const FLASH_MS: u32 = 3_000;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (flash, set_flash) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let staff_options = move || {
        store.staff().with(|staff| {
            staff
                .iter()
                .filter(|p| p.role == Role::Staff)
                .map(|p| (p.id.clone(), p.display_name().to_string()))
                .collect::<Vec<_>>()
        })
    };

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut input = NewTask::new(title.get(), assignee.get());
        let text = description.get();
        if !text.trim().is_empty() {
            input = input.with_description(text);
        }
        if let Ok(day) = NaiveDate::parse_from_str(&due_date.get(), "%Y-%m-%d") {
            input = input.with_due_date(day);
        }

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match services::create_task(session, store, input).await {
                Ok(task) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_due_date.set(String::new());
                    set_flash.set(Some(format!("Task \"{}\" created.", task.title)));
                    set_submitting.set(false);
                    TimeoutFuture::new(FLASH_MS).await;
                    set_flash.set(None);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <label>
                "Title"
                <input
                    type="text"
                    required
                    maxlength="120"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    maxlength="2000"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Assign to"
                <select
                    prop:value=move || assignee.get()
                    on:change=move |ev| set_assignee.set(event_target_value(&ev))
                >
                    <option value="">"Select staff"</option>
                    {move || staff_options().into_iter().map(|(id, name)| view! {
                        <option value=id>{name}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Due date"
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || submitting.get()>"Create task"</button>
            {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
            {move || flash.get().map(|m| view! { <p class="flash">{m}</p> })}
        </form>
    }
}
