//! Board page and form-action tests driven through the full router.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use desk_core::entities::NewIncident;
use desk_core::enums::{IncidentStatus, Severity};
use desk_db::{IncidentDb, IncidentStore};
use desk_server::{AppState, build_router};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

async fn app_with(seed: &[NewIncident]) -> (Router, AppState) {
    let store = IncidentStore::new(IncidentDb::open_local(":memory:").await.unwrap());
    for input in seed {
        store.create_incident(input).await.unwrap();
    }
    let state = AppState::new(store);
    (build_router(state.clone(), false), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a urlencoded form; returns status, `Location`, and body.
async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_links_to_board_and_form() {
    let (app, _) = app_with(&[]).await;
    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"href="/board/new""#));
    assert!(html.contains(r#"href="/board""#));
}

#[tokio::test]
async fn board_search_and_severity_filter() {
    let (app, _) = app_with(&[
        NewIncident::new("Database down", "primary lost").with_severity(Severity::High),
        NewIncident::new("Printer jam", "third floor").with_severity(Severity::Low),
        NewIncident::new("Slow queries", "DATABASE cpu at 90%").with_severity(Severity::Medium),
    ])
    .await;

    let (status, html) = get(&app, "/board?q=database&severity=All").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Database down"));
    assert!(html.contains("Slow queries"));
    assert!(!html.contains("Printer jam"));

    let (_, html) = get(&app, "/board?q=database&severity=High").await;
    assert!(html.contains("Database down"));
    assert!(!html.contains("Slow queries"));
}

#[tokio::test]
async fn board_grid_view_and_notice() {
    let (app, _) = app_with(&[NewIncident::new("Disk full", "db-2")]).await;
    let (_, html) = get(&app, "/board?view=grid&notice=created").await;
    assert!(html.contains(r#"class="grid""#));
    assert!(html.contains("Incident created successfully"));

    let (_, html) = get(&app, "/board?notice=bogus").await;
    assert!(!html.contains("data-notice"));
}

#[tokio::test]
async fn create_from_form_redirects_with_notice() {
    let (app, state) = app_with(&[]).await;
    let (status, location, _) = post_form(
        &app,
        "/board/new",
        "title=VPN+down&description=Nobody+can+connect&priority=High&status=InProgress",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/board?notice=created"));

    let incident = state.store.get_incident(1).await.unwrap();
    assert_eq!(incident.title, "VPN down");
    assert_eq!(incident.severity, Severity::High);
    assert_eq!(incident.status, IncidentStatus::InProgress);
}

#[tokio::test]
async fn create_from_form_without_title_rerenders() {
    let (app, state) = app_with(&[]).await;
    let (status, location, html) =
        post_form(&app, "/board/new", "title=&description=%3Cb%3Ekept%3C%2Fb%3E").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(location, None);
    assert!(html.contains("Title and description are required"));
    assert!(html.contains("&lt;b&gt;kept&lt;/b&gt;"));
    assert!(state.store.get_incident(1).await.is_err());
}

#[tokio::test]
async fn detail_page_and_missing_incident() {
    let (app, _) = app_with(&[NewIncident::new("Cert expired", "api.example.com")]).await;

    let (status, html) = get(&app, "/board/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Cert expired"));
    assert!(html.contains(r#"action="/board/1/status""#));

    let (status, _) = get(&app, "/board/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/board/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_change_redirects_to_detail() {
    let (app, state) = app_with(&[NewIncident::new("A", "B")]).await;
    let (status, location, _) = post_form(&app, "/board/1/status", "status=Closed").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/board/1?notice=status-updated"));
    assert_eq!(
        state.store.get_incident(1).await.unwrap().status,
        IncidentStatus::Closed
    );
}

#[tokio::test]
async fn failed_status_change_redirects_with_failure_notice() {
    let (app, _) = app_with(&[]).await;
    let (_, location, _) = post_form(&app, "/board/7/status", "status=Closed").await;
    assert_eq!(location.as_deref(), Some("/board?notice=status-failed"));

    let (_, location, _) = post_form(&app, "/board/7/status", "status=Exploded").await;
    assert_eq!(location.as_deref(), Some("/board?notice=status-failed"));
}

#[tokio::test]
async fn delete_redirects_and_removes() {
    let (app, state) = app_with(&[NewIncident::new("A", "B")]).await;
    let (status, location, _) = post_form(&app, "/board/1/delete", "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/board?notice=deleted"));
    assert!(state.store.get_incident(1).await.is_err());

    let (_, location, _) = post_form(&app, "/board/abc/delete", "").await;
    assert_eq!(location.as_deref(), Some("/board?notice=delete-failed"));
}

#[tokio::test]
async fn board_renders_unfiltered_on_undecodable_query() {
    let (app, _) = app_with(&[NewIncident::new("Disk full", "db-2")]).await;
    let (status, html) = get(&app, "/board?q=disk&q=full").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Disk full"));
}

#[tokio::test]
async fn board_rows_offer_inline_actions_and_reset() {
    let (app, _) = app_with(&[NewIncident::new("Disk full", "db-2")]).await;
    let (_, html) = get(&app, "/board?q=disk").await;
    assert!(html.contains(r#"action="/board/1/status""#));
    assert!(html.contains(r#"action="/board/1/delete""#));
    assert!(html.contains(r#"<a href="/board">Clear filters</a>"#));
}

#[tokio::test]
async fn status_change_from_board_row_returns_to_board() {
    let (app, state) = app_with(&[NewIncident::new("A", "B")]).await;
    let (status, location, _) =
        post_form(&app, "/board/1/status", "status=InProgress&from=board").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/board?notice=status-updated"));
    assert_eq!(
        state.store.get_incident(1).await.unwrap().status,
        IncidentStatus::InProgress
    );
}
