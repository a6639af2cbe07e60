//! API error type with automatic HTTP status mapping.
//!
//! Every error body is `{"error": "<message>"}`. Storage failures are logged
//! with their full cause and reported with a per-operation message.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use desk_core::errors::ValidationError;
use desk_db::error::DatabaseError;
use serde_json::json;
use thiserror::Error;

pub const FETCH_FAILED: &str = "Error fetching incidents";
pub const CREATE_FAILED: &str = "Error creating incident";
pub const UPDATE_FAILED: &str = "Error updating incident";
pub const DELETE_FAILED: &str = "Error deleting incident";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body or query string could not be decoded (400).
    #[error("{0}")]
    Malformed(String),

    /// No incident with this id (404).
    #[error("Incident {id} not found")]
    NotFound { id: i64 },

    /// Transport, store, or decode failure (500, logged).
    #[error("{action}")]
    Storage {
        action: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl ApiError {
    /// Translate a facade error, using `action` as the public message for
    /// storage failures.
    #[must_use]
    pub fn from_db(err: DatabaseError, action: &'static str) -> Self {
        match err {
            DatabaseError::Validation(e) => Self::Validation(e),
            DatabaseError::NotFound { id } => Self::NotFound { id },
            source => Self::Storage { action, source },
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage { action, source } = &self {
            tracing::error!(error = %source, "{action}");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
