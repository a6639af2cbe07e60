//! Incident update builder.
//!
//! A field left as `None` is untouched. Blank (empty or whitespace-only)
//! title and description strings are also skipped, so a patch can never
//! blank a required field.

use desk_core::enums::{IncidentStatus, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl IncidentUpdate {
    /// Title to write, if any.
    #[must_use]
    pub fn effective_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Description to write, if any.
    #[must_use]
    pub fn effective_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// True when applying this patch would only refresh `updatedAt`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_title().is_none()
            && self.effective_description().is_none()
            && self.status.is_none()
            && self.severity.is_none()
    }
}

pub struct IncidentUpdateBuilder(IncidentUpdate);

impl IncidentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IncidentUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: IncidentStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn severity(mut self, severity: Severity) -> Self {
        self.0.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn build(self) -> IncidentUpdate {
        self.0
    }
}

impl Default for IncidentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
