//! Route definitions for invitation authoring.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::invitations;
use crate::state::AppState;

/// Invitation routes mounted at `/invitations`.
///
/// ```text
/// GET    /                -> list_invitations
/// POST   /                -> create_invitation
/// PUT    /{id}            -> update_invitation
/// POST   /{id}/publish    -> publish_invitation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(invitations::list_invitations).post(invitations::create_invitation),
        )
        .route("/{id}", put(invitations::update_invitation))
        .route("/{id}/publish", post(invitations::publish_invitation))
}
