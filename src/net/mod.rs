//! Networking modules for the backend HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_api` and `applications_api` define the backend traits and their
//! gloo-net implementations, `auth_client` and `applications_client` bridge
//! those backends into the state containers, `error` owns failure
//! normalization, and `types` defines the shared wire schema.

pub mod applications_api;
pub mod applications_client;
pub mod auth_api;
pub mod auth_client;
pub mod error;
pub mod http;
pub mod types;
