//! # desk-core
//!
//! Core types shared across all Desk crates:
//! - The `Incident` entity and its create/filter inputs
//! - Status and severity enums with their storage and display forms
//! - Validation errors raised before anything reaches the store

pub mod entities;
pub mod enums;
pub mod errors;
