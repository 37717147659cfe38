//! Applications orchestration: backend CRUD into the list container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these operations instead of the backend directly so the list
//! container tracks every server-side change without a refetch. The
//! session container supplies the bearer token for each request.

#[cfg(test)]
#[path = "applications_client_test.rs"]
mod applications_client_test;

use crate::net::applications_api::ApplicationsBackend;
use crate::net::error::ApiError;
use crate::net::types::{Application, ApplicationDraft};
use crate::state::applications::ApplicationsContainer;
use crate::state::session::SessionContainer;

/// Drives the application list against an injected [`ApplicationsBackend`].
#[derive(Debug)]
pub struct ApplicationsClient<B> {
    backend: B,
    applications: ApplicationsContainer,
    session: SessionContainer,
}

impl<B: ApplicationsBackend> ApplicationsClient<B> {
    #[must_use]
    pub fn new(
        backend: B,
        applications: ApplicationsContainer,
        session: SessionContainer,
    ) -> Self {
        Self { backend, applications, session }
    }

    /// The list container this client mutates.
    #[must_use]
    pub fn applications(&self) -> &ApplicationsContainer {
        &self.applications
    }

    fn token(&self) -> Option<String> {
        self.session.get().token
    }

    /// Refetch the whole list into the container.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure; the user-facing message is also
    /// written to the container's error field.
    pub async fn load(&self) -> Result<Vec<Application>, ApiError> {
        self.applications.set_loading(true);
        self.applications.clear_error();

        match self.backend.list(self.token().as_deref()).await {
            Ok(list) => {
                self.applications.set_applications(list.clone());
                self.applications.set_loading(false);
                Ok(list)
            }
            Err(err) => {
                self.applications.set_error(err.user_message());
                Err(err)
            }
        }
    }

    /// Fetch one application without touching the container.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure.
    pub async fn fetch(&self, id: i64) -> Result<Application, ApiError> {
        self.backend.fetch(id, self.token().as_deref()).await
    }

    /// Create an application and append the stored record to the list.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure; the list is left unchanged.
    pub async fn add(&self, draft: &ApplicationDraft) -> Result<Application, ApiError> {
        let created = self.backend.create(draft, self.token().as_deref()).await?;
        self.applications.insert(created.clone());
        Ok(created)
    }

    /// Update an application and swap the stored record into the list.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure; the list is left unchanged.
    pub async fn save(&self, id: i64, draft: &ApplicationDraft) -> Result<Application, ApiError> {
        let updated = self.backend.update(id, draft, self.token().as_deref()).await?;
        self.applications.replace(updated.clone());
        Ok(updated)
    }

    /// Delete an application and drop it from the list.
    ///
    /// # Errors
    ///
    /// Any normalized exchange failure; the list is left unchanged.
    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.backend.delete(id, self.token().as_deref()).await?;
        self.applications.remove(id);
        Ok(())
    }

    /// Clear the container's error field, as after a dismissed banner.
    pub fn clear_error(&self) {
        self.applications.clear_error();
    }
}
