//! Handlers for authoring invitations, including the publish write path
//! that triggers cache revalidation on the public viewer.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use velora_core::models::{CreateInvitation, Invitation, InvitationStatus, UpdateInvitation};
use velora_core::types::EntityId;
use velora_engine::{Filters, PageMeta};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /invitations`.
#[derive(Debug, Deserialize)]
pub struct InvitationListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl InvitationListParams {
    fn into_filters(self) -> Filters {
        let mut filters = Filters::new().with_page(self.page.unwrap_or(1));
        if let Some(per_page) = self.per_page {
            filters.per_page = per_page;
        }
        if let Some(search) = self.search {
            filters.set("search", search);
        }
        if let Some(status) = self.status {
            filters.set("status", status);
        }
        filters
    }
}

#[derive(Debug, Serialize)]
pub struct InvitationListData {
    pub items: Vec<Invitation>,
    pub meta: PageMeta,
}

/// GET /invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    Query(params): Query<InvitationListParams>,
) -> AppResult<impl IntoResponse> {
    state.invitations.load(params.into_filters()).await?;

    let list = state.invitations.list_state();
    Ok(Json(DataResponse {
        data: InvitationListData {
            items: list.items,
            meta: list.meta,
        },
    }))
}

/// POST /invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    Json(input): Json<CreateInvitation>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let invitation = state.invitations.create(input).await?;

    tracing::info!(invitation_id = %invitation.id, slug = %invitation.slug, "Invitation created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: invitation })))
}

/// PUT /invitations/{id}
pub async fn update_invitation(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateInvitation>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let invitation = state.invitations.update(id, input).await?;

    tracing::info!(invitation_id = %id, "Invitation updated");
    Ok(Json(DataResponse { data: invitation }))
}

/// Publish response: the updated record plus whether the public page's
/// cache was successfully revalidated.
#[derive(Debug, Serialize)]
pub struct PublishData {
    pub invitation: Invitation,
    pub revalidated: bool,
}

/// POST /invitations/{id}/publish
///
/// Flip the invitation to `published`, then revalidate the public page.
/// The publish itself is the source of truth; a failed revalidation only
/// risks a stale public page, so it is logged and reported in the body
/// rather than failing the request.
pub async fn publish_invitation(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateInvitation {
        status: Some(InvitationStatus::Published),
        ..UpdateInvitation::default()
    };
    let invitation = state.invitations.update(id, input).await?;

    let last_updated = invitation.updated_at.to_rfc3339();
    let revalidated = match state
        .revalidator
        .trigger(&invitation.slug, Some(&last_updated))
        .await
    {
        Ok(_) => true,
        Err(err) => {
            tracing::error!(
                invitation_id = %id,
                slug = %invitation.slug,
                error = %err,
                "Revalidation after publish failed; public page may serve stale content",
            );
            false
        }
    };

    tracing::info!(invitation_id = %id, slug = %invitation.slug, revalidated, "Invitation published");
    Ok(Json(DataResponse {
        data: PublishData {
            invitation,
            revalidated,
        },
    }))
}
