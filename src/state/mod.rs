//! Observable client-side state containers.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `applications`) so consumers can
//! depend on small focused models. Both containers are built on the same
//! copy-on-write `Store` cell: every mutation installs a complete new
//! snapshot and replays it to subscribers in emission order, so readers
//! never observe a half-updated state.

pub mod applications;
pub mod session;
pub mod store;
