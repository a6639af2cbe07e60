use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IncidentStatus, Severity};
use crate::errors::ValidationError;

/// A reported problem tracked from open to closed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an incident. `status` and `severity` fall back to
/// `Open` and `Medium`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl NewIncident {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: IncidentStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Reject blank titles and descriptions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn status_or_default(&self) -> IncidentStatus {
        self.status.unwrap_or_default()
    }

    #[must_use]
    pub fn severity_or_default(&self) -> Severity {
        self.severity.unwrap_or_default()
    }
}

/// Equality filters for listing. `None` means "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncidentFilter {
    pub status: Option<IncidentStatus>,
    pub severity: Option<Severity>,
}

impl IncidentFilter {
    #[must_use]
    pub const fn status(status: IncidentStatus) -> Self {
        Self {
            status: Some(status),
            severity: None,
        }
    }

    #[must_use]
    pub const fn severity(severity: Severity) -> Self {
        Self {
            status: None,
            severity: Some(severity),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.severity.is_none()
    }
}
