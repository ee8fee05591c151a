//! User resource adapter.

use std::sync::Arc;

use async_trait::async_trait;
use velora_core::error::ServiceError;
use velora_core::models::{CreateUser, UpdateUser, User};
use velora_core::types::EntityId;
use velora_engine::{Filters, Page, ResourceAdapter};

use crate::client::DataClient;

/// CRUD against the data service's `/users` collection.
pub struct UserAdapter {
    client: Arc<DataClient>,
}

impl UserAdapter {
    pub fn new(client: Arc<DataClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for UserAdapter {
    type Entity = User;
    type CreateInput = CreateUser;
    type UpdateInput = UpdateUser;

    async fn list(&self, filters: &Filters) -> Result<Page<User>, ServiceError> {
        let (items, total) = self.client.get_list("users", filters, "User").await?;
        Ok(Page { items, total })
    }

    async fn create(&self, input: CreateUser) -> Result<User, ServiceError> {
        self.client.post_one("users", &input, "User").await
    }

    async fn update(&self, id: EntityId, input: UpdateUser) -> Result<User, ServiceError> {
        self.client
            .patch_one(&format!("users/{id}"), &input, "User", Some(id.to_string()))
            .await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("users/{id}"), "User", id.to_string())
            .await
    }
}
