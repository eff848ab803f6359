//! # auras-client
//!
//! HTTP clients for the AURAS microservices.
//!
//! One [`ServiceClient`] per backend, each rooted at its configured base URL
//! and sharing a [`Session`] through the interceptor chain:
//!
//! - [`BearerAuth`] attaches the stored token to every outgoing request.
//! - [`SessionGuard`] clears the session on any 401 and emits
//!   [`SessionEvent::Invalidated`](auras_session::SessionEvent::Invalidated).
//!
//! Streaming responses go through the same client and the same hooks.

pub mod client;
pub mod error;
pub mod interceptor;
pub mod response;
pub mod stream;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use auras_config::AurasConfig;
use auras_core::ServiceKind;
use auras_session::Session;

pub use client::{ServiceClient, segment};
pub use error::ApiError;
pub use interceptor::{BearerAuth, Interceptor, RequestContext, SessionGuard, default_chain};
pub use response::ApiResponse;
pub use stream::{ChunkStream, collect_text};

/// The full set of service clients, all sharing one session.
#[derive(Debug, Clone)]
pub struct ApiClients {
    pub auth: ServiceClient,
    pub core: ServiceClient,
    pub ai: ServiceClient,
    pub jira: ServiceClient,
    pub notes: ServiceClient,
    pub reports: ServiceClient,
    pub gateway: ServiceClient,
    session: Session,
}

impl ApiClients {
    /// Build all seven clients from `config` with the default interceptor chain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any configured base URL is invalid.
    pub fn new(config: &AurasConfig, session: Session) -> Result<Self, ApiError> {
        let build = |kind: ServiceKind| {
            ServiceClient::new(
                kind,
                config.services.url(kind),
                &config.http,
                default_chain(&session),
            )
        };

        let clients = Self {
            auth: build(ServiceKind::Auth)?,
            core: build(ServiceKind::Core)?,
            ai: build(ServiceKind::Ai)?,
            jira: build(ServiceKind::Jira)?,
            notes: build(ServiceKind::Notes)?,
            reports: build(ServiceKind::Reports)?,
            gateway: build(ServiceKind::Gateway)?,
            session: session.clone(),
        };
        tracing::debug!(backend = clients.session.backend_name(), "service clients ready");
        Ok(clients)
    }

    #[must_use]
    pub const fn get(&self, kind: ServiceKind) -> &ServiceClient {
        match kind {
            ServiceKind::Auth => &self.auth,
            ServiceKind::Core => &self.core,
            ServiceKind::Ai => &self.ai,
            ServiceKind::Jira => &self.jira,
            ServiceKind::Notes => &self.notes,
            ServiceKind::Reports => &self.reports,
            ServiceKind::Gateway => &self.gateway,
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
    use pretty_assertions::assert_eq;

    #[test]
    fn clients_use_configured_base_urls() {
        let config = AurasConfig::default();
        let clients = ApiClients::new(&config, Session::in_memory()).unwrap();

        for kind in ServiceKind::ALL {
            let client = clients.get(kind);
            assert_eq!(client.kind(), kind);
            assert_eq!(client.base_url(), kind.default_base_url());
        }
    }

    #[test]
    fn invalid_service_url_fails_construction() {
        let mut config = AurasConfig::default();
        config.services.jira = "::nope".into();
        let err = ApiClients::new(&config, Session::in_memory()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { service: ServiceKind::Jira, .. }));
    }
}
