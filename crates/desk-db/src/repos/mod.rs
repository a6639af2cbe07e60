//! Repository modules implementing the facade operations.
//!
//! Each module adds methods to `IncidentStore` via `impl IncidentStore` blocks.

pub mod incident;
