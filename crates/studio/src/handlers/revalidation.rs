//! The explicit revalidation trigger endpoint (hop 1 of the protocol).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use velora_core::error::ServiceError;
use velora_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::revalidate::RevalidationError;
use crate::state::AppState;

/// Request body for `POST /api/revalidate-invitation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevalidateInvitationRequest {
    pub slug: String,
    pub last_updated: Option<String>,
    /// Authoring-side id, carried for log correlation only.
    pub invitation_id: Option<EntityId>,
}

/// Response body on a successful trigger.
#[derive(Debug, Serialize)]
pub struct RevalidateInvitationResponse {
    pub success: bool,
    pub revalidated: bool,
    pub timestamp: String,
    pub path: String,
}

/// POST /api/revalidate-invitation
///
/// Forward the revalidation to the viewer synchronously. Any non-2xx from
/// the viewer surfaces as `500 { error, details }`; there is no automatic
/// retry.
pub async fn revalidate_invitation(
    State(state): State<AppState>,
    Json(request): Json<RevalidateInvitationRequest>,
) -> AppResult<impl IntoResponse> {
    if request.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug is required".into()));
    }

    let ack = state
        .revalidator
        .trigger(&request.slug, request.last_updated.as_deref())
        .await
        .map_err(|err| match err {
            RevalidationError::MissingSecret => AppError::Service(ServiceError::Config(
                "REVALIDATE_SECRET is not configured".into(),
            )),
            other => AppError::Revalidation {
                details: other.to_string(),
            },
        })?;

    tracing::info!(
        slug = %request.slug,
        invitation_id = ?request.invitation_id,
        path = %ack.path,
        "Revalidation triggered",
    );

    Ok(Json(RevalidateInvitationResponse {
        success: true,
        revalidated: ack.revalidated,
        timestamp: ack.timestamp,
        path: ack.path,
    }))
}
