//! Entity structs for Desk domain objects.
//!
//! `Incident` maps to the `Incident` table. Field names serialize in
//! camelCase so the JSON shape matches the stored column names.

mod incident;

pub use incident::{Incident, IncidentFilter, NewIncident};
