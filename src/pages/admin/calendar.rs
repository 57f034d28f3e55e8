//! Admin Calendar
//!
//! Month view of tasks by due date.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use libtask_client::agenda::{day_label, month_grid, shift_month, tasks_due_on};

use crate::browser::today;
use crate::components::TaskCard;
use crate::store::{use_app_store, AppStateStoreFields};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn AdminCalendar() -> impl IntoView {
    let store = use_app_store();
    let now = today();
    let (month, set_month) = signal((now.year(), now.month()));
    let (selected, set_selected) = signal::<Option<NaiveDate>>(Some(now));

    let title = move || {
        let (year, month) = month.get();
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    };

    let cells = move || {
        let (year, month) = month.get();
        month_grid(year, month)
            .into_iter()
            .map(|cell| {
                let Some(day) = cell else {
                    return view! { <div class="calendar-cell empty"></div> }.into_any();
                };
                let count = store.tasks().with(|tasks| tasks_due_on(tasks, day).len());
                let class = move || {
                    let mut class = String::from("calendar-cell");
                    if selected.get() == Some(day) {
                        class.push_str(" selected");
                    }
                    if day == now {
                        class.push_str(" today");
                    }
                    class
                };
                view! {
                    <button type="button" class=class on:click=move |_| set_selected.set(Some(day))>
                        <span class="calendar-day">{day.day()}</span>
                        {(count > 0).then(|| view! { <span class="calendar-count">{count}</span> })}
                    </button>
                }
                .into_any()
            })
            .collect_view()
    };

    let selected_tasks = move || {
        selected
            .get()
            .map(|day| store.tasks().with(|tasks| tasks_due_on(tasks, day)))
            .unwrap_or_default()
    };

    view! {
        <section class="calendar">
            <div class="calendar-header">
                <button type="button" on:click=move |_| set_month.update(|ym| *ym = shift_month(ym.0, ym.1, -1))>"<"</button>
                <h2>{title}</h2>
                <button type="button" on:click=move |_| set_month.update(|ym| *ym = shift_month(ym.0, ym.1, 1))>">"</button>
            </div>
            <div class="calendar-grid">
                {WEEKDAYS.iter().map(|d| view! { <div class="calendar-weekday">{*d}</div> }).collect_view()}
                {cells}
            </div>

            {move || selected.get().map(|day| view! {
                <div class="calendar-day-detail">
                    <h3>{day_label(day)}</h3>
                    {move || {
                        let tasks = selected_tasks();
                        if tasks.is_empty() {
                            view! { <p class="empty">"Nothing due."</p> }.into_any()
                        } else {
                            tasks.into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view().into_any()
                        }
                    }}
                </div>
            })}
        </section>
    }
}
