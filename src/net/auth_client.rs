//! Auth orchestration: backend exchanges into session state mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthClient` is the only writer of the session container and the
//! persisted store during normal operation. Login is two sequential
//! exchanges (token, then profile); the in-memory and persisted commits
//! happen back-to-back with no await between them so a reload cannot
//! observe one without the other.
//!
//! ERROR HANDLING
//! ==============
//! Failures are normalized by the backend, written into the session's
//! error field as a user-facing message, and then returned so forms can
//! add field-level context. Nothing here retries.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::cell::Cell;

use crate::net::auth_api::AuthBackend;
use crate::net::error::ApiError;
use crate::net::types::{
    LoginCredentials, MessageResponse, RegisterCredentials, SignupResponse, User,
};
use crate::state::session::SessionContainer;
use crate::storage::keyvalue::KeyValueStorage;
use crate::storage::session_store::SessionStore;

/// Drives the session lifecycle against an injected [`AuthBackend`].
#[derive(Debug)]
pub struct AuthClient<B, S> {
    backend: B,
    session: SessionContainer,
    persisted: SessionStore<S>,
    login_in_flight: Cell<bool>,
}

impl<B: AuthBackend, S: KeyValueStorage> AuthClient<B, S> {
    #[must_use]
    pub fn new(backend: B, session: SessionContainer, persisted: SessionStore<S>) -> Self {
        Self { backend, session, persisted, login_in_flight: Cell::new(false) }
    }

    /// The session container this client mutates.
    #[must_use]
    pub fn session(&self) -> &SessionContainer {
        &self.session
    }

    /// Restore a persisted session into the in-memory container.
    ///
    /// Call once at application start. Corrupt or partial entries are
    /// discarded by the store and leave the container logged out.
    pub fn hydrate(&self) {
        if let Some(persisted) = self.persisted.load() {
            self.session.set_auth(persisted.token, persisted.user);
        }
    }

    /// Sign in: exchange credentials for a token, then fetch the profile.
    ///
    /// Only one attempt may be in flight; a second call is rejected with
    /// [`ApiError::LoginInFlight`] before it touches the session, since the
    /// running attempt still owns the loading and error fields.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure. The same user-facing message is
    /// written to the session error field before this returns.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        if self.login_in_flight.replace(true) {
            return Err(ApiError::LoginInFlight);
        }
        let result = self.login_exchanges(credentials).await;
        self.login_in_flight.set(false);
        result
    }

    async fn login_exchanges(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        self.session.set_loading(true);
        self.session.clear_error();

        let token = match self.backend.exchange_credentials(credentials).await {
            Ok(response) => response.token,
            Err(err) => return Err(self.fail_session(err)),
        };
        let user = match self.backend.fetch_profile(&token).await {
            Ok(user) => user,
            Err(err) => return Err(self.fail_session(err)),
        };

        // Commit point: both stores in immediate succession, no await.
        self.session.set_auth(token.clone(), user.clone());
        self.persisted.save(&token, &user);
        self.session.set_loading(false);
        Ok(user)
    }

    /// Create a new account; does not authenticate the caller.
    ///
    /// The account must confirm its email before `login` succeeds.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure, also written to the session error
    /// field.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<SignupResponse, ApiError> {
        self.session.set_loading(true);
        self.session.clear_error();

        match self.backend.signup(credentials).await {
            Ok(response) => {
                self.session.set_loading(false);
                Ok(response)
            }
            Err(err) => Err(self.fail_session(err)),
        }
    }

    /// Confirm an email address; leaves the session untouched.
    ///
    /// Safe to retry with the same token.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure.
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.backend.verify_email(token).await
    }

    /// Request a fresh verification email; leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure.
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.backend.resend_verification(email).await
    }

    /// Sign out: reset the container and drop the persisted entries.
    pub fn logout(&self) {
        self.session.logout();
        self.persisted.clear();
    }

    /// Record a failure on the session (ending loading) and pass it on.
    fn fail_session(&self, err: ApiError) -> ApiError {
        self.session.set_error(err.user_message());
        err
    }
}
