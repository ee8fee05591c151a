//! Invitation resource adapter and slug-keyed lookups.
//!
//! Beyond plain CRUD, invitations carry two slug-keyed operations used by
//! the public viewer: fetching the page payload for `/i/{slug}` and
//! recording a revalidation (content version + timestamp) after a cache
//! invalidation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use velora_core::error::ServiceError;
use velora_core::models::{CreateInvitation, Invitation, UpdateInvitation};
use velora_core::types::{EntityId, Timestamp};
use velora_engine::{Filters, Page, ResourceAdapter};

use crate::client::DataClient;

#[derive(Debug, Serialize)]
struct RecordRevalidation<'a> {
    content_version: &'a str,
    last_revalidated_at: Timestamp,
}

/// CRUD plus slug-keyed operations against `/invitations`.
pub struct InvitationAdapter {
    client: Arc<DataClient>,
}

impl InvitationAdapter {
    pub fn new(client: Arc<DataClient>) -> Self {
        Self { client }
    }

    /// Fetch one invitation by id.
    pub async fn find_by_id(&self, id: EntityId) -> Result<Invitation, ServiceError> {
        self.client
            .get_one(
                &format!("invitations/{id}"),
                "Invitation",
                Some(id.to_string()),
            )
            .await
    }

    /// Fetch the invitation backing the public page `/i/{slug}`.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Invitation, ServiceError> {
        self.client
            .get_one(
                &format!("invitations/slug/{slug}"),
                "Invitation",
                Some(slug.to_string()),
            )
            .await
    }

    /// Persist the content-version fingerprint and revalidation timestamp
    /// after the public page's cache entry was invalidated.
    pub async fn record_revalidation(
        &self,
        slug: &str,
        content_version: &str,
        revalidated_at: Timestamp,
    ) -> Result<Invitation, ServiceError> {
        let body = RecordRevalidation {
            content_version,
            last_revalidated_at: revalidated_at,
        };
        self.client
            .patch_one(
                &format!("invitations/slug/{slug}/revalidation"),
                &body,
                "Invitation",
                Some(slug.to_string()),
            )
            .await
    }
}

#[async_trait]
impl ResourceAdapter for InvitationAdapter {
    type Entity = Invitation;
    type CreateInput = CreateInvitation;
    type UpdateInput = UpdateInvitation;

    async fn list(&self, filters: &Filters) -> Result<Page<Invitation>, ServiceError> {
        let (items, total) = self
            .client
            .get_list("invitations", filters, "Invitation")
            .await?;
        Ok(Page { items, total })
    }

    async fn create(&self, input: CreateInvitation) -> Result<Invitation, ServiceError> {
        self.client.post_one("invitations", &input, "Invitation").await
    }

    async fn update(&self, id: EntityId, input: UpdateInvitation) -> Result<Invitation, ServiceError> {
        self.client
            .patch_one(
                &format!("invitations/{id}"),
                &input,
                "Invitation",
                Some(id.to_string()),
            )
            .await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("invitations/{id}"), "Invitation", id.to_string())
            .await
    }
}
