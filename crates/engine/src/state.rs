//! State owned by an [`crate::EntityManager`].

use velora_core::error::ServiceError;
use velora_core::types::{EntityId, Timestamp};

use crate::filters::Filters;

/// Lifecycle of the list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Error,
}

/// Pagination metadata for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            per_page: crate::filters::DEFAULT_PER_PAGE,
        }
    }
}

/// List state for one resource.
///
/// Invariants: `items.len() <= meta.total`; when `status == Error`,
/// `last_error` is set and `items` still holds the last successfully
/// fetched page (stale but valid).
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
    pub filters: Filters,
    pub status: ListStatus,
    pub last_error: Option<ServiceError>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            filters: Filters::default(),
            status: ListStatus::Idle,
            last_error: None,
        }
    }
}

/// Create/edit dialog state.
///
/// The mode/target invariants hold by construction: only `Edit` carries a
/// target entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> DialogState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }
}

/// Kind of in-flight mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Ephemeral record of one in-flight mutation.
///
/// Created when the mutation starts, destroyed when it settles. At most one
/// ticket may be outstanding per entity id (and one for creates, which have
/// no id yet); a second mutation against the same key is rejected while one
/// is pending, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTicket {
    /// `None` for creates: the entity has no id until the server assigns one.
    pub entity_id: Option<EntityId>,
    pub kind: MutationKind,
    pub submitted_at: Timestamp,
}
