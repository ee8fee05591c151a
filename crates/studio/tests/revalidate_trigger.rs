//! Tests for hop 1 of the revalidation protocol: the trigger endpoint
//! forwards to the viewer with the shared secret and surfaces viewer
//! failures as structured errors.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{build_test_app, json_request, response_json, test_config};

/// The data service is never touched by these tests; point the client at a
/// closed port so an accidental call fails loudly.
const NO_DATA_SERVICE: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn trigger_forwards_slug_timestamp_and_path_with_bearer() {
    let viewer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/revalidate"))
        .and(header("authorization", "Bearer test-secret"))
        .and(body_partial_json(json!({
            "slug": "garden-party",
            "lastUpdated": "2024-01-01T00:00:00Z",
            "path": "/i/garden-party"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "revalidated": true,
            "path": "/i/garden-party",
            "timestamp": "2024-01-01T00:00:05Z"
        })))
        .expect(1)
        .mount(&viewer)
        .await;

    let app = build_test_app(test_config(NO_DATA_SERVICE, &viewer.uri(), Some("test-secret")));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/revalidate-invitation",
            json!({
                "slug": "garden-party",
                "lastUpdated": "2024-01-01T00:00:00Z",
                "invitationId": Uuid::new_v4()
            }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["revalidated"], true);
    assert_eq!(body["path"], "/i/garden-party");
    assert_eq!(body["timestamp"], "2024-01-01T00:00:05Z");
}

#[tokio::test]
async fn viewer_rejection_surfaces_as_500_with_details() {
    let viewer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/revalidate"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })),
        )
        .mount(&viewer)
        .await;

    let app = build_test_app(test_config(NO_DATA_SERVICE, &viewer.uri(), Some("wrong-secret")));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/revalidate-invitation",
            json!({ "slug": "garden-party" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to revalidate public page");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("401"), "details should carry the status: {details}");
}

#[tokio::test]
async fn unreachable_viewer_surfaces_as_500_with_details() {
    // Nothing listens on this port.
    let app = build_test_app(test_config(
        NO_DATA_SERVICE,
        "http://127.0.0.1:9",
        Some("test-secret"),
    ));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/revalidate-invitation",
            json!({ "slug": "garden-party" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to revalidate public page");
    assert!(body["details"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn blank_slug_is_rejected_before_forwarding() {
    let viewer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/revalidate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&viewer)
        .await;

    let app = build_test_app(test_config(NO_DATA_SERVICE, &viewer.uri(), Some("test-secret")));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/revalidate-invitation",
            json!({ "slug": "   " }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_secret_is_a_config_error_not_a_silent_skip() {
    let viewer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/revalidate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&viewer)
        .await;

    let app = build_test_app(test_config(NO_DATA_SERVICE, &viewer.uri(), None));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/revalidate-invitation",
            json!({ "slug": "garden-party" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CONFIG_ERROR");
}
