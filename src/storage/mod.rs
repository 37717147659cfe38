//! Durable client-side persistence.
//!
//! DESIGN
//! ======
//! Persistence capability is injected, not sniffed from the environment:
//! `keyvalue` defines the raw storage providers (browser `localStorage`,
//! in-memory, none) and `session_store` layers the session's token/user
//! schema on top. Hosts without durable storage get the no-op provider and
//! every operation degrades silently.

pub mod keyvalue;
pub mod session_store;
