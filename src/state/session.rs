//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, login forms, and user-aware components all observe this
//! container to coordinate redirects and identity-dependent rendering. The
//! auth client is the only writer during normal operation.
//!
//! INVARIANT: `is_authenticated` is true exactly when both the token and
//! the user are present. Every mutator below preserves this.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::state::store::{Store, Subscription};

/// One immutable snapshot of the client's authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Opaque bearer token for the active session.
    pub token: Option<String>,
    /// Account the token belongs to.
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True while a login or registration exchange is in flight.
    pub is_loading: bool,
    /// User-facing message for the most recent failure.
    pub error: Option<String>,
}

impl SessionState {
    /// Snapshot for a signed-in account.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }
}

/// Observable holder of the current [`SessionState`].
///
/// Cloning yields a second handle to the same session; there is one logical
/// session per client instance, owned by whoever constructs the container.
#[derive(Clone, Debug, Default)]
pub struct SessionContainer {
    store: Store<SessionState>,
}

impl SessionContainer {
    /// Create a container holding the empty, logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.store.get()
    }

    /// Observe every snapshot transition, starting with the current one.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&SessionState) + 'static) -> Subscription<SessionState> {
        self.store.subscribe(callback)
    }

    /// Install a signed-in session and clear any stale error.
    ///
    /// The loading flag is left for the caller to manage; login keeps it
    /// set until the persisted store write has also completed.
    pub fn set_auth(&self, token: impl Into<String>, user: User) {
        let token = token.into();
        self.store.update(|state| SessionState {
            token: Some(token),
            user: Some(user),
            is_authenticated: true,
            is_loading: state.is_loading,
            error: None,
        });
    }

    /// Reset to the empty session.
    ///
    /// The loading flag is preserved so a logout issued mid-exchange does
    /// not hide an in-flight spinner it does not own.
    pub fn logout(&self) {
        self.store
            .update(|state| SessionState { is_loading: state.is_loading, ..SessionState::default() });
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.store.update(|state| SessionState { is_loading, ..state.clone() });
    }

    /// Record a failure message and end the loading state.
    pub fn set_error(&self, error: impl Into<String>) {
        let error = error.into();
        self.store
            .update(|state| SessionState { error: Some(error), is_loading: false, ..state.clone() });
    }

    pub fn clear_error(&self) {
        self.store.update(|state| SessionState { error: None, ..state.clone() });
    }
}
