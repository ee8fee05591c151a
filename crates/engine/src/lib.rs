//! Resource-agnostic entity management for Velora admin surfaces.
//!
//! One [`EntityManager`] instance is the single source of truth for one
//! resource type's list, filter, dialog, and mutation state. It is generic
//! over a [`ResourceAdapter`], so the same engine hosts users, resellers, or
//! any other CRUD resource; what differs per resource (confirm-delete
//! prompt, export behavior) is injected through [`ResourceHooks`].
//!
//! The [`presentation`] module derives disposable view models (stat cards,
//! table specs) from engine snapshots; it never owns state.

pub mod adapter;
pub mod filters;
pub mod hooks;
pub mod manager;
pub mod memo;
pub mod presentation;
pub mod state;

pub use adapter::{EntityRecord, Page, ResourceAdapter};
pub use filters::Filters;
pub use hooks::ResourceHooks;
pub use manager::EntityManager;
pub use state::{DialogState, ListState, ListStatus, MutationKind, MutationTicket, PageMeta};
