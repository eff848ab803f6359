//! Base URLs of the AURAS backends.

use auras_core::ServiceKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_url(kind: ServiceKind) -> String {
    kind.default_base_url().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServicesConfig {
    #[serde(default = "ServicesConfig::default_auth")]
    pub auth: String,
    #[serde(default = "ServicesConfig::default_core")]
    pub core: String,
    #[serde(default = "ServicesConfig::default_ai")]
    pub ai: String,
    #[serde(default = "ServicesConfig::default_jira")]
    pub jira: String,
    #[serde(default = "ServicesConfig::default_notes")]
    pub notes: String,
    #[serde(default = "ServicesConfig::default_reports")]
    pub reports: String,
    #[serde(default = "ServicesConfig::default_gateway")]
    pub gateway: String,
}

impl ServicesConfig {
    fn default_auth() -> String {
        default_url(ServiceKind::Auth)
    }
    fn default_core() -> String {
        default_url(ServiceKind::Core)
    }
    fn default_ai() -> String {
        default_url(ServiceKind::Ai)
    }
    fn default_jira() -> String {
        default_url(ServiceKind::Jira)
    }
    fn default_notes() -> String {
        default_url(ServiceKind::Notes)
    }
    fn default_reports() -> String {
        default_url(ServiceKind::Reports)
    }
    fn default_gateway() -> String {
        default_url(ServiceKind::Gateway)
    }

    /// Base URL configured for `kind`.
    #[must_use]
    pub fn url(&self, kind: ServiceKind) -> &str {
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

    /// Point every service at the same base URL (a single gateway or a test server).
    #[must_use]
    pub fn all_at(base_url: &str) -> Self {
        Self {
            auth: base_url.to_string(),
            core: base_url.to_string(),
            ai: base_url.to_string(),
            jira: base_url.to_string(),
            notes: base_url.to_string(),
            reports: base_url.to_string(),
            gateway: base_url.to_string(),
        }
    }

    /// Reject empty or scheme-less URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ServiceKind::ALL {
            let url = self.url(kind).trim();
            if url.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("services.{kind}"),
                    reason: "URL is empty".into(),
                });
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: format!("services.{kind}"),
                    reason: format!("'{url}' must start with http:// or https://"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            auth: Self::default_auth(),
            core: Self::default_core(),
            ai: Self::default_ai(),
            jira: Self::default_jira(),
            notes: Self::default_notes(),
            reports: Self::default_reports(),
            gateway: Self::default_gateway(),
        }
    }
}
