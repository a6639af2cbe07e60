//! Incident repository: list, get, create, update, delete.
//!
//! Every method is a single statement. Create and update read the row back
//! with `RETURNING` instead of issuing a second query.

use desk_core::entities::{Incident, IncidentFilter, NewIncident};

use crate::error::DatabaseError;
use crate::helpers::{NOW_SQL, get_datetime, parse_enum};
use crate::store::IncidentStore;
use crate::updates::incident::IncidentUpdate;

const SELECT_COLS: &str = "id, title, description, status, severity, createdAt, updatedAt";

/// `createdAt` as comparable datetime text. SQLite sorts every INTEGER before
/// every TEXT, so epoch-millisecond rows are converted before ordering.
const CREATED_AT_SORT_KEY: &str = "CASE WHEN typeof(createdAt) = 'integer' \
     THEN strftime('%Y-%m-%d %H:%M:%f', createdAt / 1000.0, 'unixepoch') \
     ELSE COALESCE(strftime('%Y-%m-%d %H:%M:%f', createdAt), createdAt) END";

fn row_to_incident(row: &libsql::Row) -> Result<Incident, DatabaseError> {
    Ok(Incident {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        severity: parse_enum(&row.get::<String>(4)?)?,
        created_at: get_datetime(row, 5)?,
        updated_at: get_datetime(row, 6)?,
    })
}

/// Append `AND {column} IN (?n, ...)` matching any stored form of a variant.
fn push_in_clause(
    sql: &mut String,
    params: &mut Vec<libsql::Value>,
    column: &str,
    forms: &[&str],
) {
    let placeholders = forms
        .iter()
        .map(|form| {
            params.push((*form).into());
            format!("?{}", params.len())
        })
        .collect::<Vec<_>>()
        .join(", ");
    sql.push_str(&format!(" AND {column} IN ({placeholders})"));
}

impl IncidentStore {
    /// All incidents matching `filter`, newest first.
    pub async fn list_incidents(
        &self,
        filter: IncidentFilter,
    ) -> Result<Vec<Incident>, DatabaseError> {
        let mut sql = format!("SELECT {SELECT_COLS} FROM Incident WHERE 1=1");
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(status) = filter.status {
            push_in_clause(&mut sql, &mut params, "status", status.stored_forms());
        }
        if let Some(severity) = filter.severity {
            push_in_clause(&mut sql, &mut params, "severity", severity.stored_forms());
        }
        sql.push_str(&format!(" ORDER BY {CREATED_AT_SORT_KEY} DESC, id DESC"));

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut incidents = Vec::new();
        while let Some(row) = rows.next().await? {
            incidents.push(row_to_incident(&row)?);
        }
        tracing::debug!(count = incidents.len(), ?filter, "listed incidents");
        Ok(incidents)
    }

    pub async fn get_incident(&self, id: i64) -> Result<Incident, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM Incident WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound { id })?;
        row_to_incident(&row)
    }

    /// Insert a new incident. `createdAt` and `updatedAt` come from the same
    /// store clock reading.
    pub async fn create_incident(&self, input: &NewIncident) -> Result<Incident, DatabaseError> {
        input.validate()?;

        let sql = format!(
            "INSERT INTO Incident (title, description, status, severity, createdAt, updatedAt)
             VALUES (?1, ?2, ?3, ?4, {NOW_SQL}, {NOW_SQL})
             RETURNING {SELECT_COLS}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![
                    input.title.as_str(),
                    input.description.as_str(),
                    input.status_or_default().as_str(),
                    input.severity_or_default().as_str()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let incident = row_to_incident(&row)?;

        tracing::info!(id = incident.id, severity = %incident.severity, "created incident");
        Ok(incident)
    }

    /// Apply `update` to an existing incident and refresh `updatedAt`.
    pub async fn update_incident(
        &self,
        id: i64,
        update: &IncidentUpdate,
    ) -> Result<Incident, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(title) = update.effective_title() {
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(description) = update.effective_description() {
            sets.push(format!("description = ?{idx}"));
            params.push(description.into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(severity) = update.severity {
            sets.push(format!("severity = ?{idx}"));
            params.push(severity.as_str().into());
            idx += 1;
        }
        sets.push(format!("updatedAt = {NOW_SQL}"));
        params.push(id.into());

        let sql = format!(
            "UPDATE Incident SET {} WHERE id = ?{idx} RETURNING {SELECT_COLS}",
            sets.join(", ")
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound { id })?;
        let incident = row_to_incident(&row)?;

        tracing::info!(id, ?update, "updated incident");
        Ok(incident)
    }

    /// Hard delete. Deleting an id that does not exist is not an error.
    pub async fn delete_incident(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Incident WHERE id = ?1", [id])
            .await?;
        tracing::info!(id, affected, "deleted incident");
        Ok(())
    }
}
