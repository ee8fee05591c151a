pub mod health;
pub mod invitation;
pub mod revalidation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /revalidate    cache invalidation (POST, bearer-authenticated)
/// ```
pub fn api_routes() -> Router<AppState> {
    revalidation::router()
}

/// Build the public page routes, mounted at root level.
///
/// ```text
/// /i/{slug}      invitation page payload (GET)
/// ```
pub fn page_routes() -> Router<AppState> {
    invitation::router()
}
