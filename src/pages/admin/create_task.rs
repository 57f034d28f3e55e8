//! Create Task Page
//!
//! Task creation plus the tag vocabulary used to categorize tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NewTaskForm;
use crate::context::use_session;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CreateTaskPage() -> impl IntoView {
    view! {
        <section class="create-task">
            <h2>"Create task"</h2>
            <NewTaskForm />
            <TagManager />
        </section>
    }
}

#[component]
fn TagManager() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match services::create_tag(session, store, name).await {
                Ok(_) => {
                    set_new_name.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="tag-manager">
            <h3>"Tags"</h3>
            <div class="task-tags">
                <For
                    each=move || store.tags().get()
                    key=|tag| tag.id.clone()
                    children=move |tag| {
                        let tag_id = tag.id.clone();
                        let on_delete = move |_| {
                            let tag_id = tag_id.clone();
                            spawn_local(async move {
                                match services::delete_tag(session, store, tag_id).await {
                                    Ok(()) => set_error.set(None),
                                    Err(e) => set_error.set(Some(e)),
                                }
                            });
                        };
                        view! {
                            <span class="tag-chip">
                                {tag.name}
                                <button type="button" class="tag-remove" title="Delete tag" on:click=on_delete>"×"</button>
                            </span>
                        }
                    }
                />
            </div>
            <form class="tag-add-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="New tag"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Add tag"</button>
            </form>
            {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
        </div>
    }
}
