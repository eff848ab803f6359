//! The backends the client talks to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the AURAS microservices (or the gateway in front of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Auth,
    Core,
    Ai,
    Jira,
    Notes,
    Reports,
    Gateway,
}

impl ServiceKind {
    pub const ALL: [Self; 7] = [
        Self::Auth,
        Self::Core,
        Self::Ai,
        Self::Jira,
        Self::Notes,
        Self::Reports,
        Self::Gateway,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Core => "core",
            Self::Ai => "ai",
            Self::Jira => "jira",
            Self::Notes => "notes",
            Self::Reports => "reports",
            Self::Gateway => "gateway",
        }
    }

    /// Local development address of the service.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Auth => "http://localhost:3001",
            Self::Core => "http://localhost:3002",
            Self::Ai => "http://localhost:3003",
            Self::Jira => "http://localhost:3004",
            Self::Notes => "http://localhost:3005",
            Self::Reports => "http://localhost:3006",
            Self::Gateway => "http://localhost:80",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
