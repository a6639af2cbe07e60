//! Status and severity enums for incidents.
//!
//! Both enums serialize as their variant name (`"InProgress"`, `"Medium"`),
//! which is also the text written to the `Incident` table. Rows written by the
//! first deployment used Spanish labels; those are accepted as aliases when
//! decoding and are matched by the list filters through `stored_forms()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// IncidentStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an incident.
///
/// Any status may be set from any other; the board offers all three.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum IncidentStatus {
    #[default]
    #[serde(alias = "Abierto")]
    Open,
    #[serde(alias = "En progreso")]
    InProgress,
    #[serde(alias = "Cerrado")]
    Closed,
}

impl IncidentStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "InProgress",
            Self::Closed => "Closed",
        }
    }

    /// Human-readable label for pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Closed => "Closed",
        }
    }

    /// Every text form a row with this status may carry in storage.
    #[must_use]
    pub const fn stored_forms(self) -> &'static [&'static str] {
        match self {
            Self::Open => &["Open", "Abierto"],
            Self::InProgress => &["InProgress", "En progreso"],
            Self::Closed => &["Closed", "Cerrado"],
        }
    }

    /// Badge colour used by the board.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Open => "#3b82f6",
            Self::InProgress => "#eab308",
            Self::Closed => "#22c55e",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(s)
                    || status
                        .stored_forms()
                        .iter()
                        .any(|form| form.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "status",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How badly an incident hurts. The new-incident form calls this "priority".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Severity {
    #[serde(alias = "Baja")]
    Low,
    #[default]
    #[serde(alias = "Media")]
    Medium,
    #[serde(alias = "Alta")]
    High,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub const fn stored_forms(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["Low", "Baja"],
            Self::Medium => &["Medium", "Media"],
            Self::High => &["High", "Alta"],
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|severity| {
                severity
                    .stored_forms()
                    .iter()
                    .any(|form| form.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "severity",
                value: s.to_string(),
            })
    }
}
