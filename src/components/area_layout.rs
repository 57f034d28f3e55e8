//! Area Layout Component
//!
//! Navigation shell shared by the admin and staff areas. Loads tasks, staff
//! and tags when the area is entered.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_navigate;
use libtask_client::guard::LOGIN_ROUTE;

use super::{replace_history, ErrorBanner};
use crate::context::use_session;
use crate::services;
use crate::store::use_app_store;

/// (href, label)
pub type NavLink = (&'static str, &'static str);

#[component]
pub fn AreaLayout(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let navigate = use_navigate();
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        if let Err(e) = services::load_all(session, store).await {
            set_load_error.set(Some(e));
        }
    });

    let on_logout = move |_| {
        services::sign_out(session);
        navigate(LOGIN_ROUTE, replace_history());
    };

    view! {
        <div class="app-layout">
            <nav class="side-nav">
                <h1>{title}</h1>
                <p class="nav-user">
                    {move || session.profile().and_then(|p| p.email).unwrap_or_default()}
                </p>
                {links
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
                <button class="logout-btn" on:click=on_logout>"Log out"</button>
            </nav>

            <main class="main-content">
                <ErrorBanner message=load_error />
                <Outlet />
            </main>
        </div>
    }
}
