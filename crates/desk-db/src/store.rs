//! The incident facade.
//!
//! `IncidentStore` is created once at startup and shared by every request.
//! Each operation is one round trip on the wrapped connection; there is no
//! caching and no retry. Operations are implemented in `repos::incident`.

use crate::IncidentDb;

pub struct IncidentStore {
    db: IncidentDb,
}

impl IncidentStore {
    #[must_use]
    pub const fn new(db: IncidentDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &IncidentDb {
        &self.db
    }
}
