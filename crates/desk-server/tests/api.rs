//! JSON API tests driven through the full router.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use desk_db::{IncidentDb, IncidentStore};
use desk_server::{AppState, build_router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let db = IncidentDb::open_local(":memory:").await.unwrap();
    build_router(AppState::new(IncidentStore::new(db)), false)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_update_delete_scenario() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/incidents",
        Some(json!({ "title": "A", "description": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "A");
    assert_eq!(created["description"], "B");
    assert_eq!(created["status"], "Open");
    assert_eq!(created["severity"], "Medium");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, updated) = send(
        &app,
        "PATCH",
        "/incidents/1",
        Some(json!({ "status": "Closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Closed");
    assert_eq!(updated["title"], "A");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, body) = send(&app, "DELETE", "/incidents/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Incident deleted successfully" }));

    let (status, list) = send(&app, "GET", "/incidents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_without_title_is_400_and_writes_nothing() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/incidents",
        Some(json!({ "description": "no title" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "title is required" }));

    let (_, list) = send(&app, "GET", "/incidents", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_with_unknown_severity_is_400() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/incidents",
        Some(json!({ "title": "A", "description": "B", "severity": "Critical" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid severity value: 'Critical'" }));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/incidents")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_filters_by_status_and_ignores_blank_params() {
    let app = app().await;
    for (title, status) in [("one", "Open"), ("two", "Closed"), ("three", "Closed")] {
        let (code, _) = send(
            &app,
            "POST",
            "/incidents",
            Some(json!({ "title": title, "description": "d", "status": status })),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
    }

    let (_, closed) = send(&app, "GET", "/incidents?status=Closed", None).await;
    let closed = closed.as_array().unwrap();
    assert_eq!(closed.len(), 2);
    assert!(closed.iter().all(|i| i["status"] == "Closed"));

    let (_, all) = send(&app, "GET", "/incidents?status=&severity=", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, "GET", "/incidents?status=Pending", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "PATCH",
        "/incidents/99",
        Some(json!({ "status": "Closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Incident 99 not found" }));
}

#[tokio::test]
async fn patch_with_empty_strings_keeps_fields() {
    let app = app().await;
    send(
        &app,
        "POST",
        "/incidents",
        Some(json!({ "title": "A", "description": "B" })),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PATCH",
        "/incidents/1",
        Some(json!({ "title": "", "description": "", "severity": "High" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "A");
    assert_eq!(updated["description"], "B");
    assert_eq!(updated["severity"], "High");
}

#[tokio::test]
async fn delete_unknown_id_is_200() {
    let app = app().await;
    let (status, body) = send(&app, "DELETE", "/incidents/12345", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Incident deleted successfully");
}

#[tokio::test]
async fn get_by_id() {
    let app = app().await;
    send(
        &app,
        "POST",
        "/incidents",
        Some(json!({ "title": "A", "description": "B", "severity": "Low" })),
    )
    .await;

    let (status, incident) = send(&app, "GET", "/incidents/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(incident["severity"], "Low");

    let (status, _) = send(&app, "GET", "/incidents/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/incidents/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "id: must be an integer" }));
}

#[tokio::test]
async fn undecodable_query_string_is_a_json_400() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/incidents?status=Open&status=Closed", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}
