//! Typed REST client for the hosted data service.
//!
//! The data service is an opaque CRUD provider; this crate owns transport,
//! the `{ "data": ... }` envelope, timeouts, and classification of HTTP
//! failures into the [`velora_core::error::ServiceError`] taxonomy. Each
//! managed resource gets a thin adapter implementing
//! [`velora_engine::ResourceAdapter`] on top of [`DataClient`].

pub mod client;
pub mod error;
pub mod resources;

pub use client::DataClient;
pub use resources::{InvitationAdapter, ResellerAdapter, UserAdapter};
