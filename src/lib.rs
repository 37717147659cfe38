//! # internhub-client
//!
//! Client-side data layer for the Internship Hub job-application tracker.
//! HTTP client wrappers, authentication session storage, and observable
//! state containers that feed UI components.
//!
//! ARCHITECTURE
//! ============
//! `net` speaks HTTP to the backend and normalizes failures, `state` holds
//! observable snapshots for UI consumers, `storage` persists the session
//! across page reloads, and `guard` gates navigation to protected routes.
//! Browser-only plumbing is gated behind the `hydrate` feature so the crate
//! compiles and unit-tests natively.

pub mod config;
pub mod guard;
pub mod net;
pub mod state;
pub mod storage;

/// Install the panic hook and console logger for browser builds.
///
/// Call once at application start, before any other crate API.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
