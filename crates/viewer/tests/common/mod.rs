#![allow(dead_code)] // not every test binary uses every helper
//! Shared harness for viewer API tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use uuid::Uuid;

use velora_core::models::{Invitation, InvitationStatus};
use velora_viewer::config::ViewerConfig;
use velora_viewer::router::build_app_router;
use velora_viewer::state::AppState;

/// Build a test `ViewerConfig` pointing at the given data-service URL.
pub fn test_config(data_service_url: &str, secret: Option<&str>) -> ViewerConfig {
    ViewerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_service_url: data_service_url.to_string(),
        data_service_key: None,
        revalidate_secret: secret.map(String::from),
    }
}

/// Build the full application router plus the state backing it, so tests
/// can seed and inspect the page cache directly.
pub fn build_test_app(config: ViewerConfig) -> (Router, AppState) {
    let state = AppState::from_config(config.clone()).expect("state wiring failed");
    let app = build_app_router(state.clone(), &config);
    (app, state)
}

/// Build a JSON request with an optional bearer token.
pub fn json_request(
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build a bodyless GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
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

/// An invitation record for seeding the cache directly.
pub fn invitation(slug: &str, status: InvitationStatus) -> Invitation {
    Invitation {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: "Garden Party".to_string(),
        host_names: "Ana & Ben".to_string(),
        event_date: "2025-09-20T17:00:00Z".parse().unwrap(),
        status,
        owner_id: Uuid::new_v4(),
        content_version: None,
        last_revalidated_at: None,
        created_at: "2025-07-01T12:00:00Z".parse().unwrap(),
        updated_at: "2025-07-02T12:00:00Z".parse().unwrap(),
    }
}

/// An invitation record as the data service would return it.
pub fn invitation_json(slug: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": Uuid::new_v4(),
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
