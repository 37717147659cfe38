//! Navigation guard for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per navigation to a protected path, before the page renders:
//! a cheap local token check first, then one profile fetch to catch stale
//! or revoked tokens. The verification result is not cached here; each
//! protected navigation pays one round trip. Hydrating the in-memory
//! session is the auth client's job, not the guard's.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::auth_api::AuthBackend;
use crate::storage::keyvalue::KeyValueStorage;
use crate::storage::session_store::SessionStore;

/// Where failed navigations are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Path prefixes that require a valid session.
pub const PROTECTED_ROUTES: &[&str] = &["/applications"];

/// Whether `path` falls under a protected prefix.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|route| path.starts_with(route))
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed.
    Allow,
    /// Session absent or invalid; send the user to [`LOGIN_ROUTE`].
    RedirectToLogin,
}

/// Session check applied to navigations into protected paths.
#[derive(Clone, Debug)]
pub struct RouteGuard<B, S> {
    backend: B,
    store: SessionStore<S>,
}

impl<B: AuthBackend, S: KeyValueStorage> RouteGuard<B, S> {
    #[must_use]
    pub fn new(backend: B, store: SessionStore<S>) -> Self {
        Self { backend, store }
    }

    /// Gate a navigation to `path`; unprotected paths always pass.
    pub async fn check_navigation(&self, path: &str) -> GuardDecision {
        if !is_protected(path) {
            return GuardDecision::Allow;
        }
        self.check_session().await
    }

    /// Validate the persisted session locally, then against the backend.
    ///
    /// Hosts without persistence cannot hold a session to validate, so the
    /// guard is inert there and the navigation is allowed.
    pub async fn check_session(&self) -> GuardDecision {
        if !self.store.available() {
            return GuardDecision::Allow;
        }
        let Some(token) = self.store.token() else {
            return GuardDecision::RedirectToLogin;
        };
        match self.backend.fetch_profile(&token).await {
            Ok(_) => GuardDecision::Allow,
            Err(err) => {
                log::warn!("clearing persisted session after failed verification: {err}");
                self.store.clear();
                GuardDecision::RedirectToLogin
            }
        }
    }
}
