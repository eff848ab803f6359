//! # auras-session
//!
//! Session persistence for the AURAS client.
//!
//! The session is exactly two keys, `auras_auth_token` and `auras_user`,
//! kept in a [`TokenStore`] backend (JSON file, OS keychain, or memory).
//! There is no encryption and no expiry tracking: an expired token is only
//! discovered when a service answers 401, at which point the client calls
//! [`Session::invalidate`].

pub mod error;
pub mod file;
pub mod keychain;
pub mod memory;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use file::FileTokenStore;
pub use keychain::KeyringTokenStore;
pub use memory::MemoryTokenStore;
pub use session::{HOME_ROUTE, LOGIN_ROUTE, Session, SessionEvent};
pub use store::{TOKEN_KEY, TokenStore, USER_KEY};

use std::sync::Arc;

use auras_config::{SessionBackend, SessionConfig};

/// Open the backend selected in configuration.
///
/// # Errors
///
/// Returns [`SessionError::HomeNotFound`] if a file-backed store has no
/// explicit path and the home directory is unknown.
pub fn open_store(config: &SessionConfig) -> Result<Arc<dyn TokenStore>, SessionError> {
    let file = || -> Result<FileTokenStore, SessionError> {
        match &config.path {
            Some(path) => Ok(FileTokenStore::new(path)),
            None => FileTokenStore::in_home(),
        }
    };

    let store: Arc<dyn TokenStore> = match config.backend {
        SessionBackend::File => Arc::new(file()?),
        SessionBackend::Keyring => Arc::new(KeyringTokenStore::new(file()?)),
        SessionBackend::Memory => Arc::new(MemoryTokenStore::new()),
    };
    Ok(store)
}

/// Open the configured backend and wrap it in a [`Session`].
///
/// # Errors
///
/// See [`open_store`].
pub fn open(config: &SessionConfig) -> Result<Session, SessionError> {
    open_store(config).map(Session::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_needs_no_home() {
        let config = SessionConfig {
            backend: SessionBackend::Memory,
            path: None,
        };
        let store = open_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn file_backend_honors_explicit_path() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        let config = SessionConfig {
            backend: SessionBackend::File,
            path: Some(path.clone()),
        };

        let session = open(&config).unwrap();
        session.establish("T1", None).unwrap();
        assert!(path.exists());

        let reopened = open(&config).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("T1"));
        assert_eq!(reopened.backend_name(), "file");
    }
}
