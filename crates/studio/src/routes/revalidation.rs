//! Route definition for the revalidation trigger.

use axum::routing::post;
use axum::Router;

use crate::handlers::revalidation;
use crate::state::AppState;

/// ```text
/// POST /revalidate-invitation -> revalidate_invitation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/revalidate-invitation",
        post(revalidation::revalidate_invitation),
    )
}
