//! The seam between the engine and the hosted data service.
//!
//! Each managed resource provides one [`ResourceAdapter`] implementation.
//! The engine never talks to the network itself; adapters own transport,
//! timeouts, and error classification into [`ServiceError`].

use async_trait::async_trait;
use velora_core::error::ServiceError;
use velora_core::types::EntityId;

use crate::filters::Filters;

/// A record the engine can manage: anything with a stable unique id.
pub trait EntityRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> EntityId;
}

/// One page of a list response, in server-declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
}

/// CRUD operations for one resource type against the data service.
///
/// All methods fail with a classified [`ServiceError`]; the adapter is
/// responsible for request timeouts (the engine imposes none).
#[async_trait]
pub trait ResourceAdapter: Send + Sync + 'static {
    type Entity: EntityRecord;
    type CreateInput: Send + Sync;
    type UpdateInput: Send + Sync;

    async fn list(&self, filters: &Filters) -> Result<Page<Self::Entity>, ServiceError>;

    async fn create(&self, input: Self::CreateInput) -> Result<Self::Entity, ServiceError>;

    async fn update(
        &self,
        id: EntityId,
        input: Self::UpdateInput,
    ) -> Result<Self::Entity, ServiceError>;

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError>;
}

/// Adapters are commonly shared between an engine instance and the handler
/// wiring that constructed them.
#[async_trait]
impl<A: ResourceAdapter> ResourceAdapter for std::sync::Arc<A> {
    type Entity = A::Entity;
    type CreateInput = A::CreateInput;
    type UpdateInput = A::UpdateInput;

    async fn list(&self, filters: &Filters) -> Result<Page<Self::Entity>, ServiceError> {
        (**self).list(filters).await
    }

    async fn create(&self, input: Self::CreateInput) -> Result<Self::Entity, ServiceError> {
        (**self).create(input).await
    }

    async fn update(
        &self,
        id: EntityId,
        input: Self::UpdateInput,
    ) -> Result<Self::Entity, ServiceError> {
        (**self).update(id, input).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        (**self).delete(id).await
    }
}

// EntityRecord lives here, so the impls for the platform's records do too.

impl EntityRecord for velora_core::models::User {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl EntityRecord for velora_core::models::Reseller {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl EntityRecord for velora_core::models::Invitation {
    fn id(&self) -> EntityId {
        self.id
    }
}
