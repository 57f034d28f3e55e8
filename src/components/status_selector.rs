//! Status Selector Component
//!
//! One button per canonical task status.

use leptos::prelude::*;
use libtask_client::domain::{TaskStatus, CANONICAL_STATUSES};

#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<Option<TaskStatus>>,
    #[prop(into)] on_change: Callback<TaskStatus>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {CANONICAL_STATUSES.iter().map(|status| {
                let label = status.display_label().to_string();
                let value = status.clone();
                let selected = status.clone();
                let is_selected = move || current.with(|c| c.as_ref() == Some(&selected));
                let is_selected_for_disabled = is_selected.clone();
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        disabled=move || disabled.get() || is_selected_for_disabled()
                        on:click=move |_| on_change.run(value.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
