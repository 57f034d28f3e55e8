//! Session Context
//!
//! The signed-in session, provided via Leptos Context API. Auth actions in
//! `services` are the only writers; components read.

use leptos::prelude::*;
use libtask_client::{Profile, Session};

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session - read
    pub session: ReadSignal<Session>,
    /// Current session - write
    set_session: WriteSignal<Session>,
}

impl SessionContext {
    pub fn new(session: (ReadSignal<Session>, WriteSignal<Session>)) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
        }
    }

    /// Replace the session after an auth action
    pub(crate) fn replace(&self, session: Session) {
        self.set_session.set(session);
    }

    /// Drop back to anonymous, e.g. after a 401
    pub(crate) fn invalidate(&self) {
        if self.session.get_untracked().is_authenticated() {
            self.set_session.set(Session::Anonymous);
        }
    }

    pub fn profile(&self) -> Option<Profile> {
        self.session.with(|s| s.profile().cloned())
    }

    /// User id of the signed-in user, once resolved
    pub fn user_id(&self) -> Option<String> {
        self.profile().and_then(|p| p.user_id)
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
