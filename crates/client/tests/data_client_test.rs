// Integration tests for the data-service client using wiremock.

use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velora_client::{DataClient, InvitationAdapter, UserAdapter};
use velora_core::error::ServiceError;
use velora_core::models::{CreateUser, UpdateUser};
use velora_engine::{Filters, ResourceAdapter};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn setup() -> (MockServer, Arc<DataClient>) {
    let server = MockServer::start().await;
    let client = DataClient::new(&server.uri(), None).unwrap();
    (server, Arc::new(client))
}

fn user_json(id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": format!("{name}@example.com"),
        "full_name": name,
        "role": "customer",
        "invitation_count": 3,
        "created_at": "2025-07-01T12:00:00Z"
    })
}

fn invitation_json(id: Uuid, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "slug": slug,
        "title": "Garden Party",
        "host_names": "Ana & Ben",
        "event_date": "2025-09-20T17:00:00Z",
        "status": "published",
        "owner_id": Uuid::new_v4(),
        "content_version": null,
        "last_revalidated_at": null,
        "created_at": "2025-07-01T12:00:00Z",
        "updated_at": "2025-07-02T12:00:00Z"
    })
}

// ---------------------------------------------------------------------------
// List / envelope handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_unwraps_envelope_and_sends_pagination_and_filters() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .and(query_param("search", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [user_json(id, "ana")],
            "total": 51
        })))
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    let filters = Filters::new().with("search", "ana").with_page(2);
    let page = adapter.list(&filters).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, id);
    assert_eq!(page.total, 51);
}

#[tokio::test]
async fn service_key_is_sent_as_bearer_token() {
    let server = MockServer::start().await;
    let client = Arc::new(DataClient::new(&server.uri(), Some("svc-key".into())).unwrap());

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer svc-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [], "total": 0 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    adapter.list(&Filters::new()).await.unwrap();
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_posts_input_and_returns_created_entity() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_partial_json(json!({ "email": "cleo@example.com" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "data": user_json(id, "cleo") })),
        )
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    let created = adapter
        .create(CreateUser {
            email: "cleo@example.com".into(),
            full_name: "cleo".into(),
            role: "customer".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, id);
    assert_eq!(created.full_name, "cleo");
}

#[tokio::test]
async fn validation_failure_surfaces_server_message_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "email already registered"
        })))
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    let result = adapter
        .create(CreateUser {
            email: "dupe@example.com".into(),
            full_name: "dupe".into(),
            role: "customer".into(),
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        ServiceError::Validation("email already registered".into())
    );
}

#[tokio::test]
async fn update_of_missing_id_maps_to_not_found() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "no such row" })))
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    let result = adapter
        .update(
            id,
            UpdateUser {
                email: None,
                full_name: Some("Renamed".into()),
                role: None,
            },
        )
        .await;

    assert_eq!(
        result.unwrap_err(),
        ServiceError::NotFound {
            entity: "User",
            id: id.to_string()
        }
    );
}

#[tokio::test]
async fn conflict_surfaces_server_message_verbatim() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "user still owns invitations"
        })))
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    let result = adapter.delete(id).await;

    assert_eq!(
        result.unwrap_err(),
        ServiceError::Conflict("user still owns invitations".into())
    );
}

#[tokio::test]
async fn delete_returns_unit_on_no_content() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let adapter = UserAdapter::new(client);
    adapter.delete(id).await.unwrap();
}

#[tokio::test]
async fn transport_failure_classifies_as_network_error() {
    // Nothing listens on this port.
    let client = Arc::new(DataClient::new("http://127.0.0.1:9", None).unwrap());
    let adapter = UserAdapter::new(client);

    let result = adapter.list(&Filters::new()).await;
    assert_matches!(result, Err(ServiceError::Network(_)));
}

// ---------------------------------------------------------------------------
// Invitation slug operations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_slug_hits_the_slug_endpoint() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/invitations/slug/garden-party"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": invitation_json(id, "garden-party")
        })))
        .mount(&server)
        .await;

    let adapter = InvitationAdapter::new(client);
    let invitation = adapter.find_by_slug("garden-party").await.unwrap();

    assert_eq!(invitation.id, id);
    assert_eq!(invitation.slug, "garden-party");
}

#[tokio::test]
async fn record_revalidation_patches_version_and_timestamp() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path("/invitations/slug/garden-party/revalidation"))
        .and(body_partial_json(json!({ "content_version": "MjAyNC0wMS0w" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": invitation_json(id, "garden-party")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = InvitationAdapter::new(client);
    adapter
        .record_revalidation(
            "garden-party",
            "MjAyNC0wMS0w",
            "2024-01-01T00:00:00Z".parse().unwrap(),
        )
        .await
        .unwrap();
}
