//! # desk-db
//!
//! libSQL data access for Desk incidents.
//!
//! `IncidentDb` is the query executor: one long-lived libSQL connection,
//! either to a remote Turso database (production) or to a local file or
//! `:memory:` database (development and tests). `IncidentStore` is the
//! facade the HTTP layer talks to; its operations live in `repos::incident`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

pub use store::IncidentStore;
pub use updates::incident::{IncidentUpdate, IncidentUpdateBuilder};

/// Database handle for incident storage.
pub struct IncidentDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl IncidentDb {
    /// Connect to a remote libSQL server (Turso).
    ///
    /// No schema is applied; the remote table is managed outside this process.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the client cannot be built or connected.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::info!(url, "connected to remote libSQL database");
        Ok(Self {
            db,
            conn,
            remote: true,
        })
    }

    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Creates the `Incident` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// schema bootstrap fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let incident_db = Self {
            db,
            conn,
            remote: false,
        };
        incident_db.run_migrations().await?;
        tracing::info!(path, "opened local libSQL database");
        Ok(incident_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}
