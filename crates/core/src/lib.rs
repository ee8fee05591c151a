//! Shared domain types for the Velora platform.
//!
//! Everything here is consumed by both services (studio, viewer) and the
//! shared libraries (engine, client): entity records, the service error
//! taxonomy, and the content-version fingerprint used by cache
//! revalidation.

pub mod error;
pub mod models;
pub mod types;
pub mod version;
