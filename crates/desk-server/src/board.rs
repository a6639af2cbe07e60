//! Board filtering, view mode, and notices.
//!
//! The board fetches every incident once and narrows the list in-process, so
//! the search box and date picker never add round trips.

use chrono::NaiveDate;
use desk_core::entities::Incident;
use desk_core::enums::Severity;
use serde::Deserialize;

/// Raw `/board` query string. Every field is optional and empty values
/// count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    pub q: Option<String>,
    pub severity: Option<String>,
    pub date: Option<String>,
    pub view: Option<String>,
    pub notice: Option<String>,
}

impl BoardQuery {
    /// Query string reproducing the current filters with a different view.
    /// The notice is dropped so a toast shows only once.
    #[must_use]
    pub fn with_view(&self, view: ViewMode) -> String {
        let mut pairs = vec![format!("view={}", view.as_str())];
        for (key, value) in [("q", &self.q), ("severity", &self.severity), ("date", &self.date)] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push(format!("{key}={}", urlencoding::encode(value)));
            }
        }
        format!("?{}", pairs.join("&"))
    }
}

/// In-process board filter. All present criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    /// Lowercased search term; empty matches everything.
    pub search: String,
    /// `None` is "All".
    pub severity: Option<Severity>,
    pub date: Option<NaiveDate>,
}

impl BoardFilter {
    /// Build a filter from the query string. `All`, blank, and unrecognised
    /// values leave that criterion unset.
    #[must_use]
    pub fn from_query(query: &BoardQuery) -> Self {
        let search = query
            .q
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase();
        let severity = query
            .severity
            .as_deref()
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .and_then(|s| s.parse().ok());
        let date = query
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());
        Self {
            search,
            severity,
            date,
        }
    }

    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        let search_ok = self.search.is_empty()
            || incident.title.to_lowercase().contains(&self.search)
            || incident.description.to_lowercase().contains(&self.search);
        let severity_ok = self.severity.is_none_or(|s| s == incident.severity);
        let date_ok = self
            .date
            .is_none_or(|d| d == incident.created_at.date_naive());
        search_ok && severity_ok && date_ok
    }

    /// Keep matching incidents, preserving order.
    #[must_use]
    pub fn apply(&self, incidents: Vec<Incident>) -> Vec<Incident> {
        incidents.into_iter().filter(|i| self.matches(i)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.eq_ignore_ascii_case("grid") => Self::Grid,
            _ => Self::Table,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Grid => "grid",
        }
    }
}

/// One-shot toast carried through a redirect as `?notice=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    StatusUpdated,
    Deleted,
    StatusFailed,
    DeleteFailed,
}

impl Notice {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "created" => Some(Self::Created),
            "status-updated" => Some(Self::StatusUpdated),
            "deleted" => Some(Self::Deleted),
            "status-failed" => Some(Self::StatusFailed),
            "delete-failed" => Some(Self::DeleteFailed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::StatusUpdated => "status-updated",
            Self::Deleted => "deleted",
            Self::StatusFailed => "status-failed",
            Self::DeleteFailed => "delete-failed",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Created => "Incident created successfully",
            Self::StatusUpdated => "Status updated",
            Self::Deleted => "Incident deleted successfully",
            Self::StatusFailed => "Error updating incident",
            Self::DeleteFailed => "Error deleting incident",
        }
    }

    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::StatusFailed | Self::DeleteFailed)
    }
}
