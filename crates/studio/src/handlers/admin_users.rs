//! Handlers for the users admin surface.
//!
//! Every operation goes through the shared user entity manager, so the
//! double-submission guard and stale-read semantics apply to API callers
//! exactly as they do to the dashboard UI.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;
use velora_core::models::{CreateUser, UpdateUser, User};
use velora_core::types::EntityId;
use velora_engine::presentation::{StatCard, TableSpec};
use velora_engine::{Filters, PageMeta};

use crate::error::AppResult;
use crate::resources::users;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/users`.
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}

impl UserListParams {
    fn into_filters(self) -> Filters {
        let mut filters = Filters::new().with_page(self.page.unwrap_or(1));
        if let Some(per_page) = self.per_page {
            filters.per_page = per_page;
        }
        if let Some(search) = self.search {
            filters.set("search", search);
        }
        if let Some(role) = self.role {
            filters.set("role", role);
        }
        filters
    }
}

/// Payload for the users list endpoint: the page, its meta, and the derived
/// view models the dashboard renders.
#[derive(Debug, Serialize)]
pub struct UserListData {
    pub items: Vec<User>,
    pub meta: PageMeta,
    pub stats: Vec<StatCard>,
    pub table: TableSpec,
}

/// GET /admin/users
///
/// Load the page matching the query filters and derive the view models.
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> AppResult<impl IntoResponse> {
    state.users.load(params.into_filters()).await?;

    let list = state.users.list_state();
    let stats = users::statistics(&list.items, list.meta.total, Utc::now());

    Ok(Json(DataResponse {
        data: UserListData {
            items: list.items,
            meta: list.meta,
            stats,
            table: users::table_spec(),
        },
    }))
}

/// POST /admin/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = state.users.create(input).await?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// PUT /admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = state.users.update(id, input).await?;

    tracing::info!(user_id = %id, "User updated");
    Ok(Json(DataResponse { data: user }))
}

/// DELETE /admin/users/{id}
///
/// Idempotent: deleting an id that is not present succeeds without a
/// data-service call.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.users.handle_delete(id).await?;

    if deleted {
        tracing::info!(user_id = %id, "User deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/users/export
///
/// CSV of the currently loaded page under the current filters.
pub async fn export_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.users.export_current();

    let list = state.users.list_state();
    let csv = users::to_csv(&list.items)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"users.csv\"",
            ),
        ],
        csv,
    ))
}
