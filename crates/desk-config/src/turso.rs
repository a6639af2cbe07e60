//! Turso/libSQL connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TursoConfig {
    /// Database URL (e.g., `libsql://incidents-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database auth token.
    #[serde(default)]
    pub auth_token: String,
}

impl TursoConfig {
    /// Check if both the URL and the auth token are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Fail with the first missing field. The server refuses to start without
    /// remote credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` naming the missing field.
    pub fn require(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "turso",
                missing: "url",
            });
        }
        if self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "turso",
                missing: "auth_token",
            });
        }
        Ok(())
    }
}
