//! Applications endpoints of the backend, behind an injectable trait.
//!
//! DESIGN
//! ======
//! Create and update submit multipart form bodies (the resume upload rides
//! along as a blob part); reads are plain JSON. Every request bears the
//! session token when one is supplied. DELETE may answer with an empty
//! body, which counts as success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "applications_api_test.rs"]
mod applications_api_test;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Application, ApplicationDraft};

#[cfg(any(test, feature = "hydrate"))]
const APPLICATIONS_PATH: &str = "/applications";

#[cfg(any(test, feature = "hydrate"))]
fn application_path(id: i64) -> String {
    format!("/applications/{id}")
}

/// Backend CRUD operations consumed by `ApplicationsClient`.
#[allow(async_fn_in_trait)]
pub trait ApplicationsBackend {
    /// Fetch every application visible to the session.
    async fn list(&self, token: Option<&str>) -> Result<Vec<Application>, ApiError>;

    /// Fetch one application by id.
    async fn fetch(&self, id: i64, token: Option<&str>) -> Result<Application, ApiError>;

    /// Create an application from a draft; returns the stored record.
    async fn create(
        &self,
        draft: &ApplicationDraft,
        token: Option<&str>,
    ) -> Result<Application, ApiError>;

    /// Replace the application with `id`; returns the stored record.
    async fn update(
        &self,
        id: i64,
        draft: &ApplicationDraft,
        token: Option<&str>,
    ) -> Result<Application, ApiError>;

    /// Delete the application with `id`.
    async fn delete(&self, id: i64, token: Option<&str>) -> Result<(), ApiError>;
}

/// gloo-net implementation of [`ApplicationsBackend`].
///
/// Outside the browser (no `hydrate` feature) every call fails with a
/// network-unavailable error so native callers degrade without panicking.
#[derive(Clone, Debug, Default)]
pub struct HttpApplicationsBackend {
    config: ApiConfig,
}

impl HttpApplicationsBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &http::bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn form_encode_error() -> ApiError {
    ApiError::Unknown { status: None, message: "could not encode the form body".to_owned() }
}

/// Assemble the multipart body: text fields, then the resume blob part.
#[cfg(feature = "hydrate")]
fn multipart_body(draft: &ApplicationDraft) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| form_encode_error())?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(name, &value).map_err(|_| form_encode_error())?;
    }
    if let Some(resume) = &draft.resume {
        let bytes = js_sys::Uint8Array::from(resume.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let blob =
            web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|_| form_encode_error())?;
        form.append_with_blob_and_filename("resume", &blob, &resume.file_name)
            .map_err(|_| form_encode_error())?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn submit_draft(
    builder: gloo_net::http::RequestBuilder,
    draft: &ApplicationDraft,
    token: Option<&str>,
) -> Result<Application, ApiError> {
    let body = multipart_body(draft)?;
    let response = with_auth(builder, token)
        .body(body)
        .map_err(|e| http::transport_error(&e))?
        .send()
        .await
        .map_err(|e| http::transport_error(&e))?;
    http::decode_json(response).await
}

impl ApplicationsBackend for HttpApplicationsBackend {
    async fn list(&self, token: Option<&str>) -> Result<Vec<Application>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.endpoint(APPLICATIONS_PATH));
            let response = with_auth(request, token)
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

    async fn fetch(&self, id: i64, token: Option<&str>) -> Result<Application, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&application_path(id));
            let request = gloo_net::http::Request::get(&url);
            let response = with_auth(request, token)
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            http::decode_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
            Err(http::unavailable())
        }
    }

    async fn create(
        &self,
        draft: &ApplicationDraft,
        token: Option<&str>,
    ) -> Result<Application, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.endpoint(APPLICATIONS_PATH));
            submit_draft(request, draft, token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, token);
            Err(http::unavailable())
        }
    }

    async fn update(
        &self,
        id: i64,
        draft: &ApplicationDraft,
        token: Option<&str>,
    ) -> Result<Application, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&application_path(id));
            let request = gloo_net::http::Request::put(&url);
            submit_draft(request, draft, token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, draft, token);
            Err(http::unavailable())
        }
    }

    async fn delete(&self, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&application_path(id));
            let request = gloo_net::http::Request::delete(&url);
            let response = with_auth(request, token)
                .send()
                .await
                .map_err(|e| http::transport_error(&e))?;
            // DELETE answers 200 with either a JSON marker or nothing.
            let _: serde_json::Value = http::decode_json_or_empty(response).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
            Err(http::unavailable())
        }
    }
}
