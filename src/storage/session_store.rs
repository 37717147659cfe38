//! Persisted session entries: the token/user pair that survives reloads.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails: malformed or partial entries are removed and treated
//! as logged-out, so a corrupt `localStorage` value cannot wedge the app in
//! a half-authenticated state. Saves serialize first and write both keys
//! back-to-back so readers see the pair together.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::User;
use crate::storage::keyvalue::KeyValueStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "auth_user";

/// The persisted half of a session: what `load` recovers after a reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

/// Session persistence over an injected [`KeyValueStorage`] provider.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether the underlying provider can persist at all.
    #[must_use]
    pub fn available(&self) -> bool {
        self.storage.available()
    }

    /// The stored bearer token, without touching the user entry.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Recover the persisted session, self-healing on bad data.
    ///
    /// A missing token means logged-out. A token with a missing or
    /// unparseable user entry is treated the same way, and both keys are
    /// removed so the next load starts clean.
    #[must_use]
    pub fn load(&self) -> Option<PersistedSession> {
        let token = self.storage.get(TOKEN_KEY)?;
        let Some(raw_user) = self.storage.get(USER_KEY) else {
            self.clear();
            return None;
        };
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(PersistedSession { token, user }),
            Err(err) => {
                log::warn!("discarding corrupt persisted session: {err}");
                self.clear();
                None
            }
        }
    }

    /// Persist the token/user pair.
    ///
    /// The user is serialized before either key is written so a failed
    /// encode cannot leave a token without its user.
    pub fn save(&self, token: &str, user: &User) {
        let Ok(raw_user) = serde_json::to_string(user) else {
            return;
        };
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(USER_KEY, &raw_user);
    }

    /// Remove both entries; safe to call on an already-empty store.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
