//! Invitation entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// Publication status of an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Draft,
    Published,
    Archived,
}

/// A digital invitation as returned by the data service.
///
/// `slug` identifies the public page at `/i/{slug}`. `content_version` and
/// `last_revalidated_at` are written by the viewer's revalidation endpoint,
/// never by the authoring write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    pub host_names: String,
    pub event_date: Timestamp,
    pub status: InvitationStatus,
    pub owner_id: EntityId,
    pub content_version: Option<String>,
    pub last_revalidated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invitation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvitation {
    #[validate(length(min = 1, max = 80))]
    pub slug: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub host_names: String,
    pub event_date: Timestamp,
    pub owner_id: EntityId,
}

/// DTO for updating an existing invitation. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInvitation {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub host_names: Option<String>,
    pub event_date: Option<Timestamp>,
    pub status: Option<InvitationStatus>,
}
