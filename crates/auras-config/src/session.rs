//! Where the session token is kept between runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage backend for the session token and user profile.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackend {
    /// JSON file under the home directory.
    #[default]
    File,
    /// OS keychain, falling back to the file when the keychain is unavailable.
    Keyring,
    /// Process memory only; nothing survives a restart.
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,

    /// Override for the session file (defaults to `~/.auras/session.json`).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_file() {
        let config = SessionConfig::default();
        assert_eq!(config.backend, SessionBackend::File);
        assert!(config.path.is_none());
    }
}
