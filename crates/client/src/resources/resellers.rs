//! Reseller resource adapter.

use std::sync::Arc;

use async_trait::async_trait;
use velora_core::error::ServiceError;
use velora_core::models::{CreateReseller, Reseller, UpdateReseller};
use velora_core::types::EntityId;
use velora_engine::{Filters, Page, ResourceAdapter};

use crate::client::DataClient;

/// CRUD against the data service's `/resellers` collection.
pub struct ResellerAdapter {
    client: Arc<DataClient>,
}

impl ResellerAdapter {
    pub fn new(client: Arc<DataClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for ResellerAdapter {
    type Entity = Reseller;
    type CreateInput = CreateReseller;
    type UpdateInput = UpdateReseller;

    async fn list(&self, filters: &Filters) -> Result<Page<Reseller>, ServiceError> {
        let (items, total) = self.client.get_list("resellers", filters, "Reseller").await?;
        Ok(Page { items, total })
    }

    async fn create(&self, input: CreateReseller) -> Result<Reseller, ServiceError> {
        self.client.post_one("resellers", &input, "Reseller").await
    }

    async fn update(&self, id: EntityId, input: UpdateReseller) -> Result<Reseller, ServiceError> {
        self.client
            .patch_one(
                &format!("resellers/{id}"),
                &input,
                "Reseller",
                Some(id.to_string()),
            )
            .await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("resellers/{id}"), "Reseller", id.to_string())
            .await
    }
}
