//! The entity management engine.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use velora_core::error::ServiceError;
use velora_core::types::EntityId;

use crate::adapter::{EntityRecord, ResourceAdapter};
use crate::filters::Filters;
use crate::hooks::ResourceHooks;
use crate::state::{DialogState, ListState, ListStatus, MutationKind, MutationTicket, PageMeta};

/// Single source of truth for one resource type's list, filter, dialog, and
/// mutation state.
///
/// All methods take `&self`; state lives behind a mutex that is never held
/// across an adapter call, so the previous state stays readable while a
/// fetch or mutation is in flight. Consumers read consistent snapshots via
/// [`EntityManager::list_state`] -- a partial view of an in-flight fetch is
/// never observable.
pub struct EntityManager<A: ResourceAdapter> {
    adapter: A,
    hooks: ResourceHooks<A::Entity>,
    inner: Mutex<Inner<A::Entity>>,
}

struct Inner<T> {
    list: ListState<T>,
    dialog: DialogState<T>,
    /// In-flight mutation tickets keyed by entity id (`None` = create).
    tickets: HashMap<Option<EntityId>, MutationTicket>,
    /// Monotonic counter identifying the most recently issued `load`.
    load_seq: u64,
}

impl<A: ResourceAdapter> EntityManager<A> {
    pub fn new(adapter: A) -> Self {
        Self::with_hooks(adapter, ResourceHooks::new())
    }

    pub fn with_hooks(adapter: A, hooks: ResourceHooks<A::Entity>) -> Self {
        Self {
            adapter,
            hooks,
            inner: Mutex::new(Inner {
                list: ListState::default(),
                dialog: DialogState::Closed,
                tickets: HashMap::new(),
                load_seq: 0,
            }),
        }
    }

    // -----------------------------------------------------------------------
    // List loading
    // -----------------------------------------------------------------------

    /// Fetch the page matching `filters` and replace `items`/`meta`
    /// atomically on success.
    ///
    /// On failure the previous items are preserved and `last_error` is set.
    /// Overlapping calls follow last-writer-wins by issue order: when a call
    /// resolves after a newer one has been issued, its result is discarded
    /// (the underlying request is not aborted, only ignored on arrival).
    pub async fn load(&self, filters: Filters) -> Result<(), ServiceError> {
        let seq = {
            let mut inner = self.lock();
            inner.load_seq += 1;
            inner.list.status = ListStatus::Loading;
            inner.list.filters = filters.clone();
            inner.load_seq
        };

        let result = self.adapter.list(&filters).await;

        let mut inner = self.lock();
        if inner.load_seq != seq {
            tracing::debug!(seq, current = inner.load_seq, "discarding superseded list result");
            return Ok(());
        }

        match result {
            Ok(page) => {
                inner.list.meta = PageMeta {
                    // A short page can never claim fewer rows than it holds.
                    total: page.total.max(page.items.len() as u64),
                    page: filters.page,
                    per_page: filters.per_page,
                };
                inner.list.items = page.items;
                inner.list.status = ListStatus::Idle;
                inner.list.last_error = None;
                Ok(())
            }
            Err(err) => {
                inner.list.status = ListStatus::Error;
                inner.list.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Dialog control
    // -----------------------------------------------------------------------

    /// Open the create dialog. Silent no-op while a create is in flight.
    pub fn open_create_dialog(&self) {
        let mut inner = self.lock();
        if inner.tickets.contains_key(&None) {
            return;
        }
        inner.dialog = DialogState::Create;
    }

    /// Open the edit dialog for `entity`. Silent no-op while a mutation is
    /// in flight for that entity.
    pub fn open_edit_dialog(&self, entity: A::Entity) {
        let mut inner = self.lock();
        if inner.tickets.contains_key(&Some(entity.id())) {
            return;
        }
        inner.dialog = DialogState::Edit(entity);
    }

    pub fn close_dialog(&self) {
        self.lock().dialog = DialogState::Closed;
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create an entity and reconcile local state from the server response:
    /// the returned record is inserted (or replaces a same-id record) and
    /// `meta.total` grows by one. Closes the create dialog on success; on
    /// failure the dialog stays open for retry and `last_error` is set.
    pub async fn create(&self, input: A::CreateInput) -> Result<A::Entity, ServiceError> {
        self.open_ticket(None, MutationKind::Create)?;

        let result = self.adapter.create(input).await;

        let mut inner = self.lock();
        inner.tickets.remove(&None);
        match result {
            Ok(entity) => {
                Self::reinsert(&mut inner.list, entity.clone());
                if matches!(inner.dialog, DialogState::Create) {
                    inner.dialog = DialogState::Closed;
                }
                inner.list.last_error = None;
                tracing::info!(entity_id = %entity.id(), "entity created");
                Ok(entity)
            }
            Err(err) => {
                inner.list.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Update an entity and replace the matching local record wholesale
    /// with the server response. Closes the edit dialog for that entity on
    /// success; on failure local items are untouched and the dialog stays
    /// open for retry.
    pub async fn update(
        &self,
        id: EntityId,
        input: A::UpdateInput,
    ) -> Result<A::Entity, ServiceError> {
        self.open_ticket(Some(id), MutationKind::Update)?;

        let result = self.adapter.update(id, input).await;

        let mut inner = self.lock();
        inner.tickets.remove(&Some(id));
        match result {
            Ok(entity) => {
                if let Some(existing) = inner.list.items.iter_mut().find(|e| e.id() == id) {
                    *existing = entity.clone();
                }
                if matches!(&inner.dialog, DialogState::Edit(target) if target.id() == id) {
                    inner.dialog = DialogState::Closed;
                }
                inner.list.last_error = None;
                tracing::info!(entity_id = %id, "entity updated");
                Ok(entity)
            }
            Err(err) => {
                inner.list.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Delete an entity by id.
    ///
    /// Deleting an id with no matching local record is an idempotent
    /// success: no ticket is opened and no network call is made. An adapter
    /// `NotFound` is also treated as success -- the record is gone either
    /// way.
    pub async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        {
            let inner = self.lock();
            if !inner.list.items.iter().any(|e| e.id() == id) {
                return Ok(());
            }
        }
        self.open_ticket(Some(id), MutationKind::Delete)?;

        let result = self.adapter.delete(id).await;

        let mut inner = self.lock();
        inner.tickets.remove(&Some(id));
        match result {
            Ok(()) | Err(ServiceError::NotFound { .. }) => {
                let before = inner.list.items.len();
                inner.list.items.retain(|e| e.id() != id);
                if inner.list.items.len() < before {
                    inner.list.meta.total = inner.list.meta.total.saturating_sub(1);
                }
                inner.list.last_error = None;
                tracing::info!(entity_id = %id, "entity deleted");
                Ok(())
            }
            Err(err) => {
                inner.list.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Run the confirm-delete gate, then [`EntityManager::delete`] when
    /// confirmed.
    ///
    /// Returns `Ok(true)` when the entity was deleted, `Ok(false)` when the
    /// gate declined or there was nothing to delete. Declining is a no-op,
    /// not an error.
    pub async fn handle_delete(&self, id: EntityId) -> Result<bool, ServiceError> {
        let prompt = {
            let inner = self.lock();
            match inner.list.items.iter().find(|e| e.id() == id) {
                Some(entity) => (self.hooks.delete_prompt)(entity),
                None => return Ok(false),
            }
        };

        if !(self.hooks.confirm)(&prompt) {
            return Ok(false);
        }

        self.delete(id).await?;
        Ok(true)
    }

    /// Invoke the export hook with a snapshot of the current items and
    /// filters.
    ///
    /// The snapshot is taken up front and the hook runs without the state
    /// lock, so exports never block list or mutation operations.
    pub fn export_current(&self) {
        let (items, filters) = {
            let inner = self.lock();
            (inner.list.items.clone(), inner.list.filters.clone())
        };
        (self.hooks.export)(&items, &filters);
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Consistent snapshot of the list state.
    pub fn list_state(&self) -> ListState<A::Entity> {
        self.lock().list.clone()
    }

    pub fn dialog(&self) -> DialogState<A::Entity> {
        self.lock().dialog.clone()
    }

    /// Whether a mutation ticket is outstanding for the given key
    /// (`None` = create).
    pub fn is_mutating(&self, id: Option<EntityId>) -> bool {
        self.lock().tickets.contains_key(&id)
    }

    pub fn pending_mutations(&self) -> Vec<MutationTicket> {
        self.lock().tickets.values().cloned().collect()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Inner<A::Entity>> {
        self.inner.lock().expect("entity manager state lock poisoned")
    }

    /// Open a mutation ticket, rejecting synchronously when one is already
    /// outstanding for the same key. The rejection happens before any
    /// network call, which is what makes double-submission safe.
    fn open_ticket(&self, entity_id: Option<EntityId>, kind: MutationKind) -> Result<(), ServiceError> {
        let mut inner = self.lock();
        if inner.tickets.contains_key(&entity_id) {
            return Err(ServiceError::Conflict(
                "a previous change to this item is still being saved".into(),
            ));
        }
        inner.tickets.insert(
            entity_id,
            MutationTicket {
                entity_id,
                kind,
                submitted_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn reinsert(list: &mut ListState<A::Entity>, entity: A::Entity) {
        let id = entity.id();
        if let Some(existing) = list.items.iter_mut().find(|e| e.id() == id) {
            *existing = entity;
        } else {
            list.items.push(entity);
            list.meta.total += 1;
        }
    }
}
