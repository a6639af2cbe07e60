//! # desk-config
//!
//! Layered configuration loading for Desk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESK_*` prefix, `__` as separator)
//! 2. Legacy variables `DATABASE_URL` and `TURSO_AUTH_TOKEN`
//! 3. Project-level `./desk.toml`
//! 4. User-level `~/.config/desk/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESK_TURSO__URL` -> `turso.url`, `DESK_SERVER__PORT` -> `server.port`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! config.turso.require().expect("turso credentials");
//! println!("listening on {}", config.server.socket_addr().expect("addr"));
//! ```

mod error;
mod logging;
mod server;
mod turso;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use turso::TursoConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable names used by the first deployment.
const LEGACY_URL_VAR: &str = "DATABASE_URL";
const LEGACY_TOKEN_VAR: &str = "TURSO_AUTH_TOKEN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub turso: TursoConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("desk.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy names
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_URL_VAR, LEGACY_TOKEN_VAR])
                .map(|key| {
                    if key.as_str().eq_ignore_ascii_case(LEGACY_URL_VAR) {
                        "turso.url".into()
                    } else {
                        "turso.auth_token".into()
                    }
                }),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("DESK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("desk").join("config.toml"))
    }
}
