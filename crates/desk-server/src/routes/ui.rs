//! Board pages and their form actions.
//!
//! Mutations answer with a 303 redirect carrying a notice key. A failed
//! mutation redirects with a failure notice instead of an error page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Router;
use axum::routing::{get, post};
use desk_core::entities::{IncidentFilter, NewIncident};
use desk_core::enums::{IncidentStatus, Severity};
use desk_db::IncidentUpdateBuilder;
use desk_db::error::DatabaseError;
use serde::Deserialize;

use super::{non_empty, parse_optional};
use crate::board::{BoardFilter, BoardQuery, Notice, ViewMode};
use crate::error::{CREATE_FAILED, FETCH_FAILED};
use crate::extractors::IncidentId;
use crate::pages::{self, form::FormValues, list::BoardPage};
use crate::state::AppState;

const REQUIRED_FIELDS: &str = "Title and description are required";

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Fields posted by the new-incident form. Older clients send `priority`
/// for the severity.
#[derive(Debug, Default, Deserialize)]
pub struct NewIncidentForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
    /// `board` when posted from a board row; success then returns to the
    /// board instead of the detail page.
    pub from: Option<String>,
}

fn notice_from(raw: Option<&str>) -> Option<Notice> {
    raw.and_then(Notice::from_key)
}

/// Pages never fail on a garbled query string; they render unfiltered.
fn query_or_default<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "ignoring malformed query string");
            T::default()
        }
    }
}

fn board_redirect(notice: Notice) -> Redirect {
    Redirect::to(&format!("/board?notice={}", notice.key()))
}

/// GET /
async fn home() -> Html<String> {
    Html(pages::home::render())
}

/// GET /board
async fn board(
    State(state): State<AppState>,
    query: Result<Query<BoardQuery>, QueryRejection>,
) -> Response {
    let query = query_or_default(query);
    let filter = BoardFilter::from_query(&query);
    let view = ViewMode::from_query(query.view.as_deref());
    let notice = notice_from(query.notice.as_deref());

    match state.store.list_incidents(IncidentFilter::default()).await {
        Ok(incidents) => {
            let incidents = filter.apply(incidents);
            tracing::debug!(shown = incidents.len(), ?filter, "rendering board");
            Html(pages::list::render(&BoardPage {
                query: &query,
                filter: &filter,
                view,
                notice,
                incidents: Ok(incidents.as_slice()),
            }))
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "{FETCH_FAILED}");
            let page = pages::list::render(&BoardPage {
                query: &query,
                filter: &filter,
                view,
                notice,
                incidents: Err(FETCH_FAILED),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
        }
    }
}

/// GET /board/new
async fn new_form() -> Html<String> {
    Html(pages::form::render(&FormValues::default(), None))
}

/// POST /board/new
async fn create_from_form(
    State(state): State<AppState>,
    Form(form): Form<NewIncidentForm>,
) -> Response {
    let severity = parse_optional::<Severity>(non_empty(form.severity).or(form.priority));
    let status = parse_optional::<IncidentStatus>(form.status);

    let mut values = FormValues {
        title: form.title,
        description: form.description,
        ..FormValues::default()
    };
    let (severity, status) = match (severity, status) {
        (Ok(severity), Ok(status)) => (severity, status),
        (Err(e), _) | (_, Err(e)) => {
            let page = pages::form::render(&values, Some(&e.to_string()));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };
    values.severity = severity.unwrap_or_default();
    values.status = status.unwrap_or_default();

    let input = NewIncident {
        title: values.title.clone(),
        description: values.description.clone(),
        status,
        severity,
    };
    match state.store.create_incident(&input).await {
        Ok(_) => board_redirect(Notice::Created).into_response(),
        Err(DatabaseError::Validation(_)) => {
            let page = pages::form::render(&values, Some(REQUIRED_FIELDS));
            (StatusCode::BAD_REQUEST, Html(page)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "{CREATE_FAILED}");
            let page = pages::form::render(&values, Some(CREATE_FAILED));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
        }
    }
}

/// GET /board/{id}
async fn detail(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    query: Result<Query<NoticeQuery>, QueryRejection>,
) -> Response {
    let query = query_or_default(query);
    let Ok(id) = IncidentId::parse(&raw) else {
        return (StatusCode::NOT_FOUND, Html(pages::detail::not_found(&raw))).into_response();
    };
    match state.store.get_incident(id).await {
        Ok(incident) => Html(pages::detail::render(
            &incident,
            notice_from(query.notice.as_deref()),
        ))
        .into_response(),
        Err(DatabaseError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, Html(pages::detail::not_found(&raw))).into_response()
        }
        Err(err) => {
            tracing::error!(id, error = %err, "{FETCH_FAILED}");
            error_page(FETCH_FAILED)
        }
    }
}

fn error_page(message: &'static str) -> Response {
    let page = pages::layout(
        "Error",
        None,
        &format!(
            r#"<div class="toast error">{message}</div><p><a href="/board">Back to board</a></p>"#
        ),
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
}

/// POST /board/{id}/status
async fn change_status(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    let parsed = IncidentId::parse(&raw)
        .ok()
        .zip(form.status.parse::<IncidentStatus>().ok());
    let Some((id, status)) = parsed else {
        tracing::warn!(id = %raw, status = %form.status, "rejected status change");
        return board_redirect(Notice::StatusFailed);
    };

    let update = IncidentUpdateBuilder::new().status(status).build();
    match state.store.update_incident(id, &update).await {
        Ok(_) if form.from.as_deref() == Some("board") => board_redirect(Notice::StatusUpdated),
        Ok(_) => Redirect::to(&format!(
            "/board/{id}?notice={}",
            Notice::StatusUpdated.key()
        )),
        Err(err) => {
            tracing::error!(id, error = %err, "status change failed");
            board_redirect(Notice::StatusFailed)
        }
    }
}

/// POST /board/{id}/delete
async fn delete(State(state): State<AppState>, Path(raw): Path<String>) -> Redirect {
    let Ok(id) = IncidentId::parse(&raw) else {
        tracing::warn!(id = %raw, "rejected delete");
        return board_redirect(Notice::DeleteFailed);
    };
    match state.store.delete_incident(id).await {
        Ok(()) => board_redirect(Notice::Deleted),
        Err(err) => {
            tracing::error!(id, error = %err, "delete failed");
            board_redirect(Notice::DeleteFailed)
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/board", get(board))
        .route("/board/new", get(new_form).post(create_from_form))
        .route("/board/{id}", get(detail))
        .route("/board/{id}/status", post(change_status))
        .route("/board/{id}/delete", post(delete))
}
