//! Tests for the admin resource endpoints driven through the entity
//! management engine.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{build_test_app, empty_request, json_request, response_json, test_config, user_json};

/// The viewer is never touched by these tests.
const NO_VIEWER: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn list_users_returns_items_meta_stats_and_table() {
    let data = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [user_json("ana", 2), user_json("ben", 0)],
            "total": 2
        })))
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    let response = app
        .oneshot(empty_request("GET", "/api/admin/users"))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["meta"]["total"], 2);

    // First stat card: the page header's total.
    assert_eq!(data["stats"][0]["title"], "Total Users");
    assert_eq!(data["stats"][0]["value"], 2);
    // "Active" counts users with at least one invitation.
    assert_eq!(data["stats"][1]["title"], "Active Users");
    assert_eq!(data["stats"][1]["value"], 1);

    assert!(!data["table"]["columns"].as_array().unwrap().is_empty());
    assert!(!data["table"]["actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_user_rejects_invalid_email_before_the_data_service() {
    let data = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/users",
            json!({ "email": "not-an-email", "full_name": "Nope", "role": "customer" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_user_returns_201_with_the_created_entity() {
    let data = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": user_json("cleo", 0)
        })))
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/users",
            json!({ "email": "cleo@example.com", "full_name": "Cleo", "role": "customer" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "cleo@example.com");
}

#[tokio::test]
async fn delete_of_unknown_user_is_idempotent_no_content() {
    // No mocks mounted: the engine must not touch the data service for an
    // id it has never seen.
    let data = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/admin/users/{}", Uuid::new_v4()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn conflict_from_the_data_service_maps_to_409_verbatim() {
    let data = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "user was modified by another session"
        })))
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/users/{id}"),
            json!({ "full_name": "Renamed" }),
        ))
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["error"], "user was modified by another session");
}

#[tokio::test]
async fn export_returns_csv_of_the_currently_loaded_page() {
    let data = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [user_json("ana", 2)],
            "total": 1
        })))
        .mount(&data)
        .await;

    let app = build_test_app(test_config(&data.uri(), NO_VIEWER, None));

    // Load the page, then export the snapshot.
    app.clone()
        .oneshot(empty_request("GET", "/api/admin/users"))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/api/admin/users/export"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/csv"
    );
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("ana@example.com"));
}
