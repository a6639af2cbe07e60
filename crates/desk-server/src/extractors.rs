//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use desk_core::errors::ValidationError;

use crate::error::ApiError;

/// Incident id taken from the `{id}` path segment.
pub struct IncidentId(pub i64);

impl IncidentId {
    /// Parse a path segment as an incident id.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` unless `raw` is an integer.
    pub fn parse(raw: &str) -> Result<i64, ValidationError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
    }
}

impl<S> FromRequestParts<S> for IncidentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(Self::parse(&raw)?))
    }
}
