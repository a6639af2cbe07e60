//! Local schema bootstrap.
//!
//! Embeds the SQL at compile time and runs it on `open_local`. Statements use
//! `IF NOT EXISTS` so re-running is harmless.

use crate::IncidentDb;
use crate::error::DatabaseError;

const MIGRATION_001: &str = include_str!("../migrations/001_incident.sql");

impl IncidentDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_incident: {e}")))?;
        Ok(())
    }
}
