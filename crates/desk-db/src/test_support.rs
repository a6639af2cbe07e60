//! Shared test utilities for desk-db unit tests.

use crate::{IncidentDb, IncidentStore};

/// Create an in-memory store with the schema applied.
pub async fn test_store() -> IncidentStore {
    IncidentStore::new(IncidentDb::open_local(":memory:").await.unwrap())
}
