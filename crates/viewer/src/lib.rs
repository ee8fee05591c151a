//! Velora viewer API server library.
//!
//! The public app's HTTP service: serves invitation page data for
//! `/i/{slug}` from an in-memory cache, and exposes the authenticated
//! revalidation endpoint (hop 2 of the protocol) that invalidates a cached
//! page and records its content version. Exposed as a library so
//! integration tests and the binary entrypoint share the same router
//! construction.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
