//! Route definition for the public invitation page.

use axum::routing::get;
use axum::Router;

use crate::handlers::invitation;
use crate::state::AppState;

/// ```text
/// GET /i/{slug} -> invitation_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/i/{slug}", get(invitation::invitation_page))
}
