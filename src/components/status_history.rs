//! Status History Component

use leptos::prelude::*;
use libtask_client::domain::{staff_name, StatusUpdate};

use crate::store::{use_app_store, AppStateStoreFields};

/// Status changes of one task, newest first
#[component]
pub fn StatusHistory(#[prop(into)] history: Signal<Vec<StatusUpdate>>) -> impl IntoView {
    let store = use_app_store();

    let who = move |user_id: Option<String>| {
        let user_id = user_id.unwrap_or_default();
        store.staff().with_untracked(|staff| staff_name(staff, &user_id).to_string())
    };

    view! {
        <ol class="history">
            {move || {
                let items = history.get();
                if items.is_empty() {
                    return view! { <li class="empty">"No status changes recorded."</li> }.into_any();
                }
                items.into_iter().map(|update| view! {
                    <li>
                        <span class="history-when">{update.created_at.clone().unwrap_or_default()}</span>
                        <span class="history-status">{update.status.display_label().to_string()}</span>
                        <span class="history-who">{who(update.updated_by.clone())}</span>
                        {update.note.clone().map(|n| view! { <span class="history-note">{n}</span> })}
                    </li>
                }).collect_view().into_any()
            }}
        </ol>
    }
}
