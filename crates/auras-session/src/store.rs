//! The key-value seam every session backend implements.

use crate::error::SessionError;

/// Key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "auras_auth_token";

/// Key holding the signed-in user, serialized as JSON.
pub const USER_KEY: &str = "auras_user";

/// Durable string storage for the two session keys.
///
/// Calls are synchronous and idempotent: setting the same value twice or
/// removing a missing key both succeed.
pub trait TokenStore: Send + Sync {
    /// Read a key. `Ok(None)` when the key was never set or has been removed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete a key.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), SessionError>;

    /// Short name for status output (`file`, `keyring`, `memory`).
    fn backend_name(&self) -> &'static str;
}
