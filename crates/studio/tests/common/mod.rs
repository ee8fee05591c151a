#![allow(dead_code)] // not every test binary uses every helper
//! Shared harness for studio API tests.
//!
//! Builds the real application router (same middleware stack as
//! production) against wiremock stand-ins for the data service and the
//! public viewer.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use uuid::Uuid;

use velora_studio::config::StudioConfig;
use velora_studio::router::build_app_router;
use velora_studio::state::AppState;

/// Build a test `StudioConfig` pointing at the given stand-in URLs.
pub fn test_config(
    data_service_url: &str,
    public_app_url: &str,
    secret: Option<&str>,
) -> StudioConfig {
    StudioConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_service_url: data_service_url.to_string(),
        data_service_key: None,
        public_app_url: public_app_url.to_string(),
        revalidate_secret: secret.map(String::from),
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(config: StudioConfig) -> Router {
    let state = AppState::from_config(config.clone()).expect("state wiring failed");
    build_app_router(state, &config)
}

/// Build a JSON request.
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request.
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response into its status and parsed JSON body.
pub async fn response_json(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// A user record as the data service would return it.
pub fn user_json(name: &str, invitation_count: i64) -> serde_json::Value {
    serde_json::json!({
        "id": Uuid::new_v4(),
        "email": format!("{name}@example.com"),
        "full_name": name,
        "role": "customer",
        "invitation_count": invitation_count,
        "created_at": "2025-07-01T12:00:00Z"
    })
}

/// An invitation record as the data service would return it.
pub fn invitation_json(id: Uuid, slug: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "slug": slug,
        "title": "Garden Party",
        "host_names": "Ana & Ben",
        "event_date": "2025-09-20T17:00:00Z",
        "status": status,
        "owner_id": Uuid::new_v4(),
        "content_version": null,
        "last_revalidated_at": null,
        "created_at": "2025-07-01T12:00:00Z",
        "updated_at": "2025-07-02T12:00:00Z"
    })
}
