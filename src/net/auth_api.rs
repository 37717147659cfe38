//! Auth endpoints of the backend, behind an injectable trait.
//!
//! DESIGN
//! ======
//! `AuthBackend` is the seam between auth orchestration and the wire: the
//! auth client and route guard are generic over it, so tests drive them
//! with recording fakes while browser builds use the gloo-net
//! implementation. Every method normalizes failures through `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{
    LoginCredentials, MessageResponse, RegisterCredentials, SignupResponse, TokenResponse, User,
};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_PATH: &str = "/auth/signup";
#[cfg(any(test, feature = "hydrate"))]
const RESEND_VERIFICATION_PATH: &str = "/auth/resend-verification";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_PATH: &str = "/user/profile";

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_path(token: &str) -> String {
    format!("/auth/verify-email?token={token}")
}

/// Backend auth operations consumed by `AuthClient` and `RouteGuard`.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Exchange login credentials for a bearer token.
    async fn exchange_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<TokenResponse, ApiError>;

    /// Fetch the account profile the token belongs to.
    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError>;

    /// Create a new, unverified account.
    async fn signup(&self, credentials: &RegisterCredentials) -> Result<SignupResponse, ApiError>;

    /// Confirm an email address with a verification token.
    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError>;

    /// Request a fresh verification email.
    async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError>;
}

/// gloo-net implementation of [`AuthBackend`].
///
/// Outside the browser (no `hydrate` feature) every call fails with a
/// network-unavailable error so native callers degrade without panicking.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthBackend {
    config: ApiConfig,
}

impl HttpAuthBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl AuthBackend for HttpAuthBackend {
    async fn exchange_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .json(credentials)
                .map_err(|e| http::transport_error(&e))?
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            http::decode_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(http::unavailable())
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&self.config.endpoint(PROFILE_PATH))
                .header("Authorization", &http::bearer(token))
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            let profile: crate::net::types::ProfileResponse = http::decode_json(response).await?;
            Ok(profile.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(http::unavailable())
        }
    }

    async fn signup(&self, credentials: &RegisterCredentials) -> Result<SignupResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::post(&self.config.endpoint(SIGNUP_PATH))
                .json(credentials)
                .map_err(|e| http::transport_error(&e))?
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            http::decode_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(http::unavailable())
        }
    }

    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&verify_email_path(token));
            let response = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            http::decode_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(http::unavailable())
        }
    }

    async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email });
            let response =
                gloo_net::http::Request::post(&self.config.endpoint(RESEND_VERIFICATION_PATH))
                    .json(&payload)
                    .map_err(|e| http::transport_error(&e))?
                    .send()
                    .await
                    .map_err(|e| http::transport_error(&e))?;
            http::decode_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(http::unavailable())
        }
    }
}
