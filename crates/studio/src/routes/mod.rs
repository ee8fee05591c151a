pub mod admin;
pub mod health;
pub mod invitations;
pub mod revalidation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/users                      list, create
/// /admin/users/{id}                 update, delete
/// /admin/users/export               CSV export
/// /admin/resellers                  list, create
/// /admin/resellers/{id}             update, delete
/// /admin/resellers/export           CSV export
///
/// /invitations                      list, create
/// /invitations/{id}                 update
/// /invitations/{id}/publish         publish + revalidate (POST)
///
/// /revalidate-invitation            revalidation trigger (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/invitations", invitations::router())
        .merge(revalidation::router())
}
