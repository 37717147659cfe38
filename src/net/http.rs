//! Shared HTTP plumbing for the gloo-net backends.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses are funneled through `ApiError`
//! here, once, so the per-endpoint code in `auth_api` and `applications_api`
//! only deals with typed results.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::net::error::ApiError;

/// `Authorization` header value for a bearer token.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Stub failure returned by backends compiled without browser networking.
#[cfg_attr(feature = "hydrate", allow(dead_code))]
pub(crate) fn unavailable() -> ApiError {
    ApiError::Network { message: "HTTP is not available outside the browser".to_owned() }
}

/// Map a gloo failure into the normalized taxonomy.
///
/// Serde failures mean a response (or request payload) that did not match
/// the expected shape; everything else is a transport-level failure.
#[cfg(feature = "hydrate")]
pub(crate) fn transport_error(err: &gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::InvalidResponse { message: e.to_string() },
        other => ApiError::Network { message: other.to_string() },
    }
}

/// Decode a JSON body, normalizing non-2xx statuses and malformed bodies.
#[cfg(feature = "hydrate")]
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse { message: e.to_string() })
}

/// Like `decode_json`, but tolerate an empty success body (DELETE responses).
#[cfg(feature = "hydrate")]
pub(crate) async fn decode_json_or_empty<T: serde::de::DeserializeOwned + Default>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    let is_json = response
        .headers()
        .get("content-type")
        .is_some_and(|v| v.contains("application/json"));
    if !is_json {
        return Ok(T::default());
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse { message: e.to_string() })
}

#[cfg(feature = "hydrate")]
async fn error_from(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status, &body)
}
