//! The public invitation page endpoint.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use velora_core::error::ServiceError;
use velora_core::models::{Invitation, InvitationStatus};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Page payload plus whether it came from the cache.
#[derive(Debug, Serialize)]
pub struct PageData {
    pub invitation: Invitation,
    pub cache: &'static str,
}

/// GET /i/{slug}
///
/// Serve the page payload from the cache, populating it from the data
/// service on a miss. Only published invitations are publicly visible;
/// drafts and archived pages answer 404.
pub async fn invitation_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let path = format!("/i/{slug}");

    if let Some(entry) = state.cache.get(&path).await {
        return Ok(Json(DataResponse {
            data: PageData {
                invitation: entry.invitation,
                cache: "hit",
            },
        }));
    }

    let invitation = state.invitations.find_by_slug(&slug).await?;
    if invitation.status != InvitationStatus::Published {
        return Err(AppError::Service(ServiceError::NotFound {
            entity: "Invitation",
            id: slug,
        }));
    }

    state.cache.insert(path, invitation.clone()).await;
    tracing::debug!(slug = %invitation.slug, "Invitation page cached");

    Ok(Json(DataResponse {
        data: PageData {
            invitation,
            cache: "miss",
        },
    }))
}
