//! Application-list state for the tracked job applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard and kanban-style status columns observe this container;
//! the applications client mutates it after each backend call so the list
//! stays in step with the server without a full refetch.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use std::collections::BTreeMap;

use crate::net::types::{Application, ApplicationStatus};
use crate::state::store::{Store, Subscription};

/// One immutable snapshot of the application list and its fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationsState {
    pub applications: Vec<Application>,
    /// True while a list fetch is in flight.
    pub is_loading: bool,
    /// User-facing message for the most recent list failure.
    pub error: Option<String>,
}

impl ApplicationsState {
    /// Applications grouped by pipeline stage, in stage order.
    ///
    /// Only stages with at least one application appear; within a stage the
    /// list order is preserved.
    #[must_use]
    pub fn by_status(&self) -> BTreeMap<ApplicationStatus, Vec<Application>> {
        let mut groups: BTreeMap<ApplicationStatus, Vec<Application>> = BTreeMap::new();
        for application in &self.applications {
            groups.entry(application.status).or_default().push(application.clone());
        }
        groups
    }
}

/// Observable holder of the current [`ApplicationsState`].
#[derive(Clone, Debug, Default)]
pub struct ApplicationsContainer {
    store: Store<ApplicationsState>,
}

impl ApplicationsContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn get(&self) -> ApplicationsState {
        self.store.get()
    }

    /// Observe every snapshot transition, starting with the current one.
    #[must_use]
    pub fn subscribe(
        &self,
        callback: impl Fn(&ApplicationsState) + 'static,
    ) -> Subscription<ApplicationsState> {
        self.store.subscribe(callback)
    }

    /// Replace the whole list, as after a fresh fetch.
    pub fn set_applications(&self, applications: Vec<Application>) {
        self.store.update(|state| ApplicationsState { applications, ..state.clone() });
    }

    /// Append a newly created application.
    pub fn insert(&self, application: Application) {
        self.store.update(|state| {
            let mut applications = state.applications.clone();
            applications.push(application);
            ApplicationsState { applications, ..state.clone() }
        });
    }

    /// Swap in an updated application by id; unknown ids are ignored.
    pub fn replace(&self, application: Application) {
        self.store.update(|state| {
            let applications = state
                .applications
                .iter()
                .map(|existing| {
                    if existing.id == application.id { application.clone() } else { existing.clone() }
                })
                .collect();
            ApplicationsState { applications, ..state.clone() }
        });
    }

    /// Drop the application with `id`, if present.
    pub fn remove(&self, id: i64) {
        self.store.update(|state| {
            let applications =
                state.applications.iter().filter(|a| a.id != id).cloned().collect();
            ApplicationsState { applications, ..state.clone() }
        });
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.store.update(|state| ApplicationsState { is_loading, ..state.clone() });
    }

    /// Record a failure message and end the loading state.
    pub fn set_error(&self, error: impl Into<String>) {
        let error = error.into();
        self.store.update(|state| ApplicationsState {
            error: Some(error),
            is_loading: false,
            ..state.clone()
        });
    }

    pub fn clear_error(&self) {
        self.store.update(|state| ApplicationsState { error: None, ..state.clone() });
    }
}
