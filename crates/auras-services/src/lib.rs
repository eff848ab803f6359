//! # auras-services
//!
//! Typed operations over the AURAS backends, one service per backend:
//!
//! - [`AuthService`]: login, signup, Google login, password reset.
//! - [`CoreService`]: projects, tasks and sprints.
//! - [`AiService`]: chat (plain and streamed), summaries, analyses.
//! - [`ReportsService`]: execution health, loops, meetings, weekly reports.
//!
//! Every method makes exactly one HTTP call. Failures are logged and returned
//! as [`ServiceError`], except list getters, which log and return an empty
//! list.
//!
//! # Usage
//!
//! ```no_run
//! use auras_config::AurasConfig;
//! use auras_core::entities::TaskFilter;
//! use auras_services::Services;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let services = Services::from_config(&AurasConfig::load()?)?;
//! let tasks = services.core.get_tasks(&TaskFilter::default()).await;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

mod ai;
mod auth;
mod core_service;
mod error;
mod reports;

pub use ai::{AiService, DEFAULT_GHOST_ACTION_LIMIT};
pub use auth::AuthService;
pub use core_service::CoreService;
pub use error::ServiceError;
pub use reports::ReportsService;

use auras_client::{ApiClients, ApiError};
use auras_config::AurasConfig;
use auras_session::{Session, SessionError};
use thiserror::Error;

/// Failure while wiring the services together.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to open session store: {0}")]
    Session(#[from] SessionError),

    #[error(transparent)]
    Client(#[from] ApiError),
}

/// All domain services, sharing one session.
#[derive(Debug, Clone)]
pub struct Services {
    pub auth: AuthService,
    pub core: CoreService,
    pub ai: AiService,
    pub reports: ReportsService,
    session: Session,
}

impl Services {
    /// Open the configured token store and build every client and service.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the token store cannot be opened or a
    /// service URL is invalid.
    pub fn from_config(config: &AurasConfig) -> Result<Self, SetupError> {
        let session = auras_session::open(&config.session)?;
        let clients = ApiClients::new(config, session)?;
        Ok(Self::new(&clients))
    }

    /// Build services over existing clients.
    #[must_use]
    pub fn new(clients: &ApiClients) -> Self {
        let session = clients.session().clone();
        Self {
            auth: AuthService::new(clients.auth.clone(), session.clone()),
            core: CoreService::new(clients.core.clone()),
            ai: AiService::new(clients.ai.clone()),
            reports: ReportsService::new(clients.reports.clone()),
            session,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auras_config::SessionBackend;

    #[test]
    fn from_config_with_memory_backend() {
        let mut config = AurasConfig::default();
        config.session.backend = SessionBackend::Memory;
        let services = Services::from_config(&config).unwrap();
        assert_eq!(services.session().backend_name(), "memory");
        assert!(!services.auth.is_authenticated());
    }

    #[test]
    fn bad_url_is_a_client_setup_error() {
        let mut config = AurasConfig::default();
        config.session.backend = SessionBackend::Memory;
        config.services.ai = "::".into();
        assert!(matches!(Services::from_config(&config), Err(SetupError::Client(_))));
    }
}
