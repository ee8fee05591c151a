//! Hop 2 of the cache-revalidation protocol.
//!
//! The studio calls this endpoint with the shared secret after a content
//! mutation. On success the cached page entry is dropped and, when both
//! `slug` and `lastUpdated` are present, the content-version fingerprint is
//! persisted through the data service. Idempotent: repeating a request
//! with the same `lastUpdated` yields the same fingerprint and leaves the
//! cache in the same state.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use velora_core::error::ServiceError;
use velora_core::version::content_version;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/revalidate`. At least one of `path` and
/// `slug` must be present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevalidateRequest {
    pub path: Option<String>,
    pub slug: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    pub path: String,
    pub timestamp: String,
}

/// POST /api/revalidate
///
/// Bearer-authenticated against the shared secret. A missing configured
/// secret is a 500, never a silent skip; a bad or absent token is a 401
/// and no invalidation happens.
pub async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RevalidateRequest>,
) -> AppResult<impl IntoResponse> {
    let secret = state.config.revalidate_secret.as_deref().ok_or_else(|| {
        AppError::Service(ServiceError::Config(
            "REVALIDATE_SECRET is not configured".into(),
        ))
    })?;

    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if token != Some(secret) {
        return Err(AppError::Service(ServiceError::Unauthorized(
            "Unauthorized".into(),
        )));
    }

    // Resolve the page path: an explicit path wins, else derive from slug.
    let path = match (&request.path, &request.slug) {
        (Some(path), _) => path.clone(),
        (None, Some(slug)) => format!("/i/{slug}"),
        (None, None) => {
            return Err(AppError::BadRequest(
                "either path or slug is required".into(),
            ))
        }
    };

    let existed = state.cache.invalidate(&path).await;
    tracing::info!(path = %path, existed, "Cache entry invalidated");

    // Record the content version when one can be derived. Failing here only
    // loses bookkeeping; the invalidation already happened.
    if let (Some(slug), Some(last_updated)) = (&request.slug, &request.last_updated) {
        let version = content_version(last_updated, slug);
        match state
            .invitations
            .record_revalidation(slug, &version, Utc::now())
            .await
        {
            Ok(_) => {
                tracing::info!(slug = %slug, version = %version, "Content version recorded");
            }
            Err(err) => {
                tracing::error!(slug = %slug, error = %err, "Failed to record content version");
            }
        }
    }

    Ok(Json(RevalidateResponse {
        revalidated: true,
        path,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
