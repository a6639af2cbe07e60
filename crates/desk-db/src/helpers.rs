//! Row-to-entity parsing helpers.
//!
//! The `Incident` table has seen three timestamp encodings: `datetime('now')`
//! text, millisecond `strftime` text written by this crate, and integer epoch
//! milliseconds from the ORM that created the table. All decode to
//! `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DatabaseError;

/// SQL expression producing the store's current time as datetime text with
/// millisecond precision. Evaluates to one value per statement.
pub const NOW_SQL: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// Parse a TEXT timestamp as `DateTime<Utc>`.
///
/// Handles RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s
/// `"2026-02-09 14:30:00"` with or without fractional seconds.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches none of the formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a timestamp column stored either as text or as epoch milliseconds.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NULL, blob, or unparseable values.
pub fn get_datetime(row: &libsql::Row, idx: i32) -> Result<DateTime<Utc>, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Text(s) => parse_datetime(&s),
        libsql::Value::Integer(ms) => DateTime::from_timestamp_millis(ms).ok_or_else(|| {
            DatabaseError::Query(format!("Timestamp out of range in column {idx}: {ms}"))
        }),
        other => Err(DatabaseError::Query(format!(
            "Unexpected timestamp value in column {idx}: {other:?}"
        ))),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Goes through serde so the legacy aliases on the desk-core enums apply.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}
