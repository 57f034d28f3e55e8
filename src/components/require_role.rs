//! Require Role Component
//!
//! Renders its children only once the backend has confirmed the caller's
//! role; everyone else is sent to the login route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;
use libtask_client::domain::Role;
use libtask_client::guard::{Access, LOGIN_ROUTE};

use crate::context::use_session;
use crate::services;

/// Navigation that replaces the current history entry
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let (access, set_access) = signal(Access::Checking);

    spawn_local(async move {
        set_access.set(services::check_access(session, role).await);
    });

    // A 401 anywhere inside the area ends it
    Effect::new(move |_| {
        if !session.session.with(|s| s.is_authenticated()) {
            set_access.set(Access::Denied);
        }
    });

    move || match access.get() {
        Access::Checking => view! {
            <div class="guard-checking">"Checking access…"</div>
        }
        .into_any(),
        Access::Granted(_) => children().into_any(),
        Access::Denied => view! {
            <Redirect path=LOGIN_ROUTE options=replace_history() />
        }
        .into_any(),
    }
}
