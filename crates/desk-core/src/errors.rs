//! Validation errors for user-supplied input.
//!
//! Storage failures are defined in `desk-db`; everything here is
//! user-correctable and maps to a 400 at the HTTP layer.

use thiserror::Error;

/// Input failed validation before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Empty { field: &'static str },

    /// A value is not one of the accepted variants.
    #[error("invalid {field} value: '{value}'")]
    InvalidVariant { field: &'static str, value: String },

    /// A value has the wrong shape (e.g. a non-numeric id).
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}
