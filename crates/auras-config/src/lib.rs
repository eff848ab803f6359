//! # auras-config
//!
//! Layered configuration loading for the AURAS client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AURAS_*` prefix, `__` as separator)
//! 2. Project-level `.auras/config.toml`
//! 3. User-level `~/.config/auras/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AURAS_SERVICES__AUTH` -> `services.auth`,
//! `AURAS_HTTP__TIMEOUT_MS` -> `http.timeout_ms`, `AURAS_SESSION__BACKEND` ->
//! `session.backend`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use auras_config::AurasConfig;
//! use auras_core::ServiceKind;
//!
//! let config = AurasConfig::load_with_dotenv().expect("config");
//! println!("auth service: {}", config.services.url(ServiceKind::Auth));
//! ```

mod error;
mod http;
mod services;
mod session;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use services::ServicesConfig;
pub use session::{SessionBackend, SessionConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AurasConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AurasConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".auras/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("AURAS_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or scheme-less
    /// service URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.services.validate()?;
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_ms".into(),
                reason: "timeout must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("auras").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AurasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.timeout_ms, 30_000);
        assert_eq!(config.session.backend, SessionBackend::File);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AurasConfig::default();
        config.http.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http.timeout_ms"));
    }
}
