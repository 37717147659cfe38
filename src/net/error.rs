//! Failure normalization for the backend HTTP boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every raw failure (transport error, malformed body, non-2xx status) is
//! translated into one `ApiError` variant at the HTTP boundary so callers
//! can branch on the tagged kind without re-parsing payloads. The server's
//! `needs_verification` flag on a 401 becomes its own variant because the
//! UI must show a verification prompt, not a bad-password message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error payload shape the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Server-supplied human-readable error message.
    #[serde(default)]
    pub error: Option<String>,
    /// Set on login rejections for accounts with an unconfirmed email.
    #[serde(default)]
    pub needs_verification: Option<bool>,
}

/// Normalized failure for any backend exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport or connectivity failure; no HTTP response was received.
    #[error("network error: {message}")]
    Network { message: String },
    /// The response arrived but its body could not be decoded.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
    /// HTTP 401 without a verification flag.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
    /// HTTP 401 with the server's `needs_verification` flag set.
    #[error("email not verified: {message}")]
    NeedsVerification { message: String },
    /// HTTP 5xx.
    #[error("server error {status}: {message}")]
    ServerError { status: u16, message: String },
    /// Any other failure, with the status code when one was received.
    #[error("request failed: {message}")]
    Unknown { status: Option<u16>, message: String },
    /// A second `login` call was issued while one was still in flight.
    #[error("a sign-in attempt is already in progress")]
    LoginInFlight,
}

impl ApiError {
    /// Normalize a non-2xx HTTP response into a tagged variant.
    ///
    /// The raw body is parsed as the backend's `{error, needs_verification}`
    /// payload; a non-JSON body falls back to an `HTTP <status>` message so
    /// the caller still sees the status that was received.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            401 if parsed.needs_verification == Some(true) => Self::NeedsVerification { message },
            401 => Self::Unauthorized { message },
            500..=599 => Self::ServerError { status, message },
            _ => Self::Unknown { status: Some(status), message },
        }
    }

    /// The HTTP status this failure was derived from, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { .. } | Self::InvalidResponse { .. } | Self::LoginInFlight => None,
            Self::Unauthorized { .. } | Self::NeedsVerification { .. } => Some(401),
            Self::ServerError { status, .. } => Some(*status),
            Self::Unknown { status, .. } => *status,
        }
    }

    /// Message suitable for the session error field and form banners.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => {
                "Could not reach the server. Check your connection and try again.".to_owned()
            }
            Self::InvalidResponse { .. } => {
                "The server returned an unexpected response.".to_owned()
            }
            Self::Unauthorized { message } | Self::Unknown { message, .. } => message.clone(),
            Self::NeedsVerification { .. } => {
                "Your email has not been verified yet. Check your inbox for the verification link."
                    .to_owned()
            }
            Self::ServerError { .. } => {
                "The server encountered an error. Try again later.".to_owned()
            }
            Self::LoginInFlight => "A sign-in attempt is already in progress.".to_owned(),
        }
    }
}
