//! Route definitions for the admin resource surfaces.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{admin_resellers, admin_users};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// GET    /users              -> list_users
/// POST   /users              -> create_user
/// PUT    /users/{id}         -> update_user
/// DELETE /users/{id}         -> delete_user
/// GET    /users/export       -> export_users
///
/// GET    /resellers          -> list_resellers
/// POST   /resellers          -> create_reseller
/// PUT    /resellers/{id}     -> update_reseller
/// DELETE /resellers/{id}     -> delete_reseller
/// GET    /resellers/export   -> export_resellers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(admin_users::list_users).post(admin_users::create_user),
        )
        .route("/users/export", get(admin_users::export_users))
        .route(
            "/users/{id}",
            put(admin_users::update_user).delete(admin_users::delete_user),
        )
        .route(
            "/resellers",
            get(admin_resellers::list_resellers).post(admin_resellers::create_reseller),
        )
        .route("/resellers/export", get(admin_resellers::export_resellers))
        .route(
            "/resellers/{id}",
            put(admin_resellers::update_reseller).delete(admin_resellers::delete_reseller),
        )
}
