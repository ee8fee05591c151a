//! Reseller entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// A reseller account (white-label partner selling invitations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reseller {
    pub id: EntityId,
    pub company_name: String,
    pub contact_email: String,
    /// Commission percentage on each sale, 0-100.
    pub commission_pct: i32,
    pub is_active: bool,
    /// Number of invitations sold through this reseller.
    pub invitation_count: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new reseller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReseller {
    #[validate(length(min = 1, max = 160))]
    pub company_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(range(min = 0, max = 100))]
    pub commission_pct: i32,
}

/// DTO for updating an existing reseller. All fields are optional.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReseller {
    #[validate(length(min = 1, max = 160))]
    pub company_name: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub commission_pct: Option<i32>,
    pub is_active: Option<bool>,
}
