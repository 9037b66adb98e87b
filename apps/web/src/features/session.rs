//! Session context. The signed-in identity lives only in memory: a reload
//! starts anonymous, and logout returns to anonymous.

use attendance_core::{Identity, session::AppSession};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<AppSession>,
}

impl SessionContext {
    fn new(session: RwSignal<AppSession>) -> Self {
        Self { session }
    }

    pub fn login(&self, identity: Identity) {
        self.session.update(|session| session.login(identity));
    }

    /// Clears the identity. The verified location stays stored.
    pub fn logout(&self) {
        self.session.update(AppSession::logout);
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.with(|session| session.identity().cloned())
    }

    pub fn identity_untracked(&self) -> Option<Identity> {
        self.session
            .with_untracked(|session| session.identity().cloned())
    }
}

/// Provides an anonymous session to its children.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(AppSession::default());
    provide_context(SessionContext::new(session));

    view! { {children()} }
}

/// Returns the current session context or a fallback anonymous one.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(RwSignal::new(AppSession::default())))
}
