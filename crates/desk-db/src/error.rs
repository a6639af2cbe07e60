//! Database error types for desk-db.

use desk_core::errors::ValidationError;
use thiserror::Error;

/// Errors from incident data access.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input rejected before any statement was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No incident with this id.
    #[error("Incident {id} not found")]
    NotFound { id: i64 },

    /// A response could not be decoded (bad column value, unknown enum text).
    #[error("Query failed: {0}")]
    Query(String),

    /// Local schema bootstrap failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error (transport or store).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Transport, store, or decode failures. These are logged in full and
    /// reported to callers with a generic message.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(!DatabaseError::NotFound { id: 3 }.is_storage());
        assert!(!DatabaseError::from(ValidationError::Empty { field: "title" }).is_storage());
        assert!(DatabaseError::NoResult.is_storage());
        assert!(DatabaseError::Query("bad".into()).is_storage());
    }

    #[test]
    fn validation_message_passes_through() {
        let err = DatabaseError::from(ValidationError::Empty { field: "title" });
        assert_eq!(err.to_string(), "title is required");
    }
}
