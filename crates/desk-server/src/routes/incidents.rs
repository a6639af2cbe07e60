//! JSON incident endpoints.
//!
//! Enum fields arrive as strings so unknown values and blanks can be handled
//! here: a blank value is absent, anything else must parse.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use desk_core::entities::{Incident, IncidentFilter, NewIncident};
use desk_core::enums::{IncidentStatus, Severity};
use desk_db::IncidentUpdateBuilder;
use serde::{Deserialize, Serialize};

use super::parse_optional;
use crate::error::{ApiError, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, UPDATE_FAILED};
use crate::extractors::IncidentId;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateIncidentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateIncidentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// GET /incidents
async fn list_incidents(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Incident>>, ApiError> {
    let Query(params) = params?;
    let filter = IncidentFilter {
        status: parse_optional::<IncidentStatus>(params.status)?,
        severity: parse_optional::<Severity>(params.severity)?,
    };
    let incidents = state
        .store
        .list_incidents(filter)
        .await
        .map_err(|e| ApiError::from_db(e, FETCH_FAILED))?;
    Ok(Json(incidents))
}

/// POST /incidents
async fn create_incident(
    State(state): State<AppState>,
    payload: Result<Json<CreateIncidentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Incident>), ApiError> {
    let Json(req) = payload?;
    let input = NewIncident {
        title: req.title.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        status: parse_optional(req.status)?,
        severity: parse_optional(req.severity)?,
    };
    input.validate()?;

    let incident = state
        .store
        .create_incident(&input)
        .await
        .map_err(|e| ApiError::from_db(e, CREATE_FAILED))?;
    Ok((StatusCode::CREATED, Json(incident)))
}

/// GET /incidents/{id}
async fn get_incident(
    State(state): State<AppState>,
    IncidentId(id): IncidentId,
) -> Result<Json<Incident>, ApiError> {
    let incident = state
        .store
        .get_incident(id)
        .await
        .map_err(|e| ApiError::from_db(e, FETCH_FAILED))?;
    Ok(Json(incident))
}

/// PATCH /incidents/{id}
async fn update_incident(
    State(state): State<AppState>,
    IncidentId(id): IncidentId,
    payload: Result<Json<UpdateIncidentRequest>, JsonRejection>,
) -> Result<Json<Incident>, ApiError> {
    let Json(req) = payload?;

    let mut builder = IncidentUpdateBuilder::new();
    if let Some(title) = req.title {
        builder = builder.title(title);
    }
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(status) = parse_optional::<IncidentStatus>(req.status)? {
        builder = builder.status(status);
    }
    if let Some(severity) = parse_optional::<Severity>(req.severity)? {
        builder = builder.severity(severity);
    }

    let incident = state
        .store
        .update_incident(id, &builder.build())
        .await
        .map_err(|e| ApiError::from_db(e, UPDATE_FAILED))?;
    Ok(Json(incident))
}

/// DELETE /incidents/{id}
async fn delete_incident(
    State(state): State<AppState>,
    IncidentId(id): IncidentId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .delete_incident(id)
        .await
        .map_err(|e| ApiError::from_db(e, DELETE_FAILED))?;
    Ok(Json(DeletedResponse {
        message: "Incident deleted successfully",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/incidents", get(list_incidents).post(create_incident))
        .route(
            "/incidents/{id}",
            get(get_incident)
                .patch(update_incident)
                .delete(delete_incident),
        )
}
