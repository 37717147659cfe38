use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{
    LoginCredentials, MessageResponse, RegisterCredentials, SignupResponse, TokenResponse, User,
};
use crate::storage::keyvalue::{MemoryStorage, NoStorage};
use crate::storage::session_store::TOKEN_KEY;

/// Fake backend that serves one canned profile result and counts calls.
struct ProfileBackend {
    result: RefCell<Result<User, ApiError>>,
    calls: Cell<usize>,
    seen_token: RefCell<Option<String>>,
}

impl ProfileBackend {
    fn ok() -> Self {
        Self {
            result: RefCell::new(Ok(User { id: 1, username: "ada".to_owned() })),
            calls: Cell::new(0),
            seen_token: RefCell::new(None),
        }
    }

    fn failing(err: ApiError) -> Self {
        Self { result: RefCell::new(Err(err)), calls: Cell::new(0), seen_token: RefCell::new(None) }
    }
}

impl AuthBackend for &ProfileBackend {
    async fn exchange_credentials(
        &self,
        _credentials: &LoginCredentials,
    ) -> Result<TokenResponse, ApiError> {
        panic!("guard must not exchange credentials");
    }

    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.seen_token.borrow_mut() = Some(token.to_owned());
        self.result.borrow().clone()
    }

    async fn signup(&self, _credentials: &RegisterCredentials) -> Result<SignupResponse, ApiError> {
        panic!("guard must not sign up");
    }

    async fn verify_email(&self, _token: &str) -> Result<MessageResponse, ApiError> {
        panic!("guard must not verify email");
    }

    async fn resend_verification(&self, _email: &str) -> Result<MessageResponse, ApiError> {
        panic!("guard must not resend verification");
    }
}

fn seeded_store(token: Option<&str>) -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    if let Some(token) = token {
        store.save(token, &User { id: 1, username: "ada".to_owned() });
    }
    (store, storage)
}

// =============================================================
// is_protected
// =============================================================

#[test]
fn applications_paths_are_protected() {
    assert!(is_protected("/applications"));
    assert!(is_protected("/applications/42"));
}

#[test]
fn public_paths_are_not_protected() {
    assert!(!is_protected("/"));
    assert!(!is_protected("/login"));
    assert!(!is_protected("/register"));
}

// =============================================================
// check_navigation
// =============================================================

#[test]
fn unprotected_navigation_passes_without_any_checks() {
    let backend = ProfileBackend::ok();
    let (store, _) = seeded_store(None);
    let guard = RouteGuard::new(&backend, store);
    assert_eq!(block_on(guard.check_navigation("/login")), GuardDecision::Allow);
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn missing_token_redirects_without_a_network_call() {
    let backend = ProfileBackend::ok();
    let (store, _) = seeded_store(None);
    let guard = RouteGuard::new(&backend, store);
    assert_eq!(block_on(guard.check_navigation("/applications")), GuardDecision::RedirectToLogin);
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn valid_token_allows_navigation_and_keeps_the_store() {
    let backend = ProfileBackend::ok();
    let (store, storage) = seeded_store(Some("t"));
    let guard = RouteGuard::new(&backend, store);
    assert_eq!(block_on(guard.check_navigation("/applications")), GuardDecision::Allow);
    assert_eq!(backend.calls.get(), 1);
    assert_eq!(backend.seen_token.borrow().as_deref(), Some("t"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t"));
}

#[test]
fn rejected_token_clears_the_store_and_redirects() {
    let backend =
        ProfileBackend::failing(ApiError::Unauthorized { message: "expired".to_owned() });
    let (store, storage) = seeded_store(Some("stale"));
    let guard = RouteGuard::new(&backend, store);
    assert_eq!(block_on(guard.check_navigation("/applications")), GuardDecision::RedirectToLogin);
    assert!(storage.is_empty());
}

#[test]
fn transport_failure_clears_the_store_and_redirects() {
    let backend =
        ProfileBackend::failing(ApiError::Network { message: "connection refused".to_owned() });
    let (store, storage) = seeded_store(Some("t"));
    let guard = RouteGuard::new(&backend, store);
    assert_eq!(block_on(guard.check_session()), GuardDecision::RedirectToLogin);
    assert!(storage.is_empty());
}

#[test]
fn verification_is_not_cached_between_navigations() {
    let backend = ProfileBackend::ok();
    let (store, _) = seeded_store(Some("t"));
    let guard = RouteGuard::new(&backend, store);
    let _ = block_on(guard.check_navigation("/applications"));
    let _ = block_on(guard.check_navigation("/applications/7"));
    assert_eq!(backend.calls.get(), 2);
}

// =============================================================
// Capability-absent host
// =============================================================

#[test]
fn guard_is_inert_without_persistence() {
    let backend = ProfileBackend::ok();
    let guard = RouteGuard::new(&backend, SessionStore::new(NoStorage));
    assert_eq!(block_on(guard.check_navigation("/applications")), GuardDecision::Allow);
    assert_eq!(backend.calls.get(), 0);
}
