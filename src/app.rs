//! Cardinal LibTask Frontend App
//!
//! Session and store context plus the route table. `/admin/*` and
//! `/staff/*` sit behind role guards; anything else lands on the login page.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use libtask_client::domain::Role;
use libtask_client::guard::LOGIN_ROUTE;
use reactive_stores::Store;

use crate::components::{replace_history, AreaLayout, RequireRole};
use crate::context::SessionContext;
use crate::pages::admin::{
    AdminCalendar, AdminDashboard, AdminTasks, AuditTrail, CreateTaskPage, ReportsPage, ADMIN_LINKS,
};
use crate::pages::staff::{StaffDashboard, StaffTaskDetail, StaffTasks, STAFF_LINKS};
use crate::pages::LoginPage;
use crate::services;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // A token left from an earlier visit restores the session; its role is
    // re-resolved by the guard before anything protected renders.
    let (session, set_session) = signal(services::restore_session());
    provide_context(SessionContext::new((session, set_session)));
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_ROUTE options=replace_history() /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/")
                    view=|| view! { <Redirect path=LOGIN_ROUTE options=replace_history() /> }
                />

                <ParentRoute path=path!("/admin") view=AdminArea>
                    <Route
                        path=path!("")
                        view=|| view! { <Redirect path="/admin/dashboard" options=replace_history() /> }
                    />
                    <Route path=path!("dashboard") view=AdminDashboard />
                    <Route path=path!("tasks") view=AdminTasks />
                    <Route path=path!("create-tasks") view=CreateTaskPage />
                    <Route path=path!("calendar") view=AdminCalendar />
                    <Route path=path!("audit-trail") view=AuditTrail />
                    <Route path=path!("reports") view=ReportsPage />
                </ParentRoute>

                <ParentRoute path=path!("/staff") view=StaffArea>
                    <Route
                        path=path!("")
                        view=|| view! { <Redirect path="/staff/dashboard" options=replace_history() /> }
                    />
                    <Route path=path!("dashboard") view=StaffDashboard />
                    <Route path=path!("tasks") view=StaffTasks />
                    <Route path=path!("tasks/:id") view=StaffTaskDetail />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <AreaLayout title="LibTask Admin" links=ADMIN_LINKS />
        </RequireRole>
    }
}

#[component]
fn StaffArea() -> impl IntoView {
    view! {
        <RequireRole role=Role::Staff>
            <AreaLayout title="LibTask" links=STAFF_LINKS />
        </RequireRole>
    }
}
