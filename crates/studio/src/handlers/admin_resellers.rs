//! Handlers for the resellers admin surface.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use velora_core::models::{CreateReseller, Reseller, UpdateReseller};
use velora_core::types::EntityId;
use velora_engine::presentation::{StatCard, TableSpec};
use velora_engine::{Filters, PageMeta};

use crate::error::AppResult;
use crate::resources::resellers;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/resellers`.
#[derive(Debug, Deserialize)]
pub struct ResellerListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    /// `"true"`/`"false"` filter on active partners.
    pub active: Option<String>,
}

impl ResellerListParams {
    fn into_filters(self) -> Filters {
        let mut filters = Filters::new().with_page(self.page.unwrap_or(1));
        if let Some(per_page) = self.per_page {
            filters.per_page = per_page;
        }
        if let Some(search) = self.search {
            filters.set("search", search);
        }
        if let Some(active) = self.active {
            filters.set("active", active);
        }
        filters
    }
}

#[derive(Debug, Serialize)]
pub struct ResellerListData {
    pub items: Vec<Reseller>,
    pub meta: PageMeta,
    pub stats: Vec<StatCard>,
    pub table: TableSpec,
}

/// GET /admin/resellers
pub async fn list_resellers(
    State(state): State<AppState>,
    Query(params): Query<ResellerListParams>,
) -> AppResult<impl IntoResponse> {
    state.resellers.load(params.into_filters()).await?;

    let list = state.resellers.list_state();
    let stats = resellers::statistics(&list.items, list.meta.total);

    Ok(Json(DataResponse {
        data: ResellerListData {
            items: list.items,
            meta: list.meta,
            stats,
            table: resellers::table_spec(),
        },
    }))
}

/// POST /admin/resellers
pub async fn create_reseller(
    State(state): State<AppState>,
    Json(input): Json<CreateReseller>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let reseller = state.resellers.create(input).await?;

    tracing::info!(reseller_id = %reseller.id, "Reseller created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: reseller })))
}

/// PUT /admin/resellers/{id}
pub async fn update_reseller(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateReseller>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let reseller = state.resellers.update(id, input).await?;

    tracing::info!(reseller_id = %id, "Reseller updated");
    Ok(Json(DataResponse { data: reseller }))
}

/// DELETE /admin/resellers/{id}
pub async fn delete_reseller(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.resellers.handle_delete(id).await?;

    if deleted {
        tracing::info!(reseller_id = %id, "Reseller deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/resellers/export
pub async fn export_resellers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.resellers.export_current();

    let list = state.resellers.list_state();
    let csv = resellers::to_csv(&list.items)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resellers.csv\"",
            ),
        ],
        csv,
    ))
}
