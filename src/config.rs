//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is injected at construction rather than read from
//! ambient globals, so tests and alternate deployments can point the data
//! layer anywhere without rebuild-time environment plumbing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin used when no explicit base URL is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Backend connection settings shared by all HTTP backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for the given backend origin.
    ///
    /// A trailing slash on `base_url` is dropped so endpoint joins stay
    /// single-slashed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured backend origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute endpoint path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Resolve a server-relative file path (e.g. a stored `resume_url`)
    /// against the backend origin.
    #[must_use]
    pub fn file_url(&self, path: &str) -> String {
        self.endpoint(path)
    }
}
