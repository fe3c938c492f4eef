use dioxus::prelude::*;
use shared_types::{SessionSnapshot, SessionUser};

/// Global session state, filled once by the startup session load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    /// Set once the session endpoint has answered.
    pub loaded: Signal<bool>,
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            loaded: Signal::new(false),
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Record the result of a session load and mark the session as loaded.
    pub fn set_session(&mut self, user: Option<SessionUser>) {
        self.current_user.set(user);
        self.loaded.set(true);
    }

    /// Copy the current signals into an immutable snapshot. Reading inside an
    /// effect subscribes the effect to both signals.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loaded: *self.loaded.read(),
            user: self.current_user.read().clone(),
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
