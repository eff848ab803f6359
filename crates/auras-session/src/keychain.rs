//! OS keychain session backend.
//!
//! Each key is one keychain entry. When the keychain is unavailable, rejects
//! a call, or cannot read back what it just stored, the value goes to the
//! file backend instead, so a headless machine still keeps its session.

use crate::error::SessionError;
use crate::file::FileTokenStore;
use crate::store::TokenStore;

const DEFAULT_KEYRING_SERVICE: &str = "auras-cli";

/// Returns the keyring service name.
///
/// Defaults to `"auras-cli"`. Override via `AURAS_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("AURAS_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service: String,
    fallback: FileTokenStore,
}

impl KeyringTokenStore {
    #[must_use]
    pub fn new(fallback: FileTokenStore) -> Self {
        Self::with_service(keyring_service(), fallback)
    }

    /// Store under an explicit keychain service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>, fallback: FileTokenStore) -> Self {
        Self {
            service: service.into(),
            fallback,
        }
    }

    /// Write `value` and confirm a fresh entry reads it back.
    ///
    /// Without a platform credential store, keyring hands out per-entry mock
    /// credentials that accept writes but never persist them.
    fn store_verified(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| SessionError::Keyring(e.to_string()))?;
        match self.entry(key)?.get_password() {
            Ok(stored) if stored == value => Ok(()),
            Ok(_) => Err(SessionError::Keyring("read-back mismatch".into())),
            Err(e) => Err(SessionError::Keyring(format!("read-back failed: {e}"))),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, SessionError> {
        keyring::Entry::new(&self.service, key).map_err(|e| SessionError::Keyring(e.to_string()))
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        if let Ok(entry) = self.entry(key)
            && let Ok(value) = entry.get_password()
            && !value.is_empty()
        {
            return Ok(Some(value));
        }
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        match self.store_verified(key, value) {
            // Drop any copy an earlier fallback left behind.
            Ok(()) => self.fallback.remove(key),
            Err(error) => {
                tracing::warn!(%error, key, "keyring store failed; falling back to file");
                self.fallback.set(key, value)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        // Missing entries are fine; the value may only exist in the file.
        if let Ok(entry) = self.entry(key) {
            let _ = entry.delete_credential();
        }
        self.fallback.remove(key)
    }

    fn backend_name(&self) -> &'static str {
        "keyring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{TOKEN_KEY, USER_KEY};

    fn store_in(dir: &tempfile::TempDir) -> KeyringTokenStore {
        let fallback = FileTokenStore::new(dir.path().join("session.json"));
        KeyringTokenStore::with_service("auras-cli-test", fallback)
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(TOKEN_KEY, "T1").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("T1"));

        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn fresh_store_reads_back_earlier_write() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set(USER_KEY, r#"{"id":"1"}"#).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get(USER_KEY).unwrap().as_deref(), Some(r#"{"id":"1"}"#));
        reopened.remove(USER_KEY).unwrap();
    }
}
