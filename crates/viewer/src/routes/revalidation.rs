//! Route definition for the revalidation endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::revalidate;
use crate::state::AppState;

/// ```text
/// POST /revalidate -> revalidate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/revalidate", post(revalidate::revalidate))
}
