//! Partial-update types for mutations.

pub mod incident;
