//! JSON-file session backend.
//!
//! Both keys live in one map so a clear is a single write. The parent
//! directory is created `0700` and the file written `0600` on Unix.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::store::TokenStore;

const SESSION_DIR_NAME: &str = ".auras";
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.auras/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::HomeNotFound`] if the home directory is unknown.
    pub fn in_home() -> Result<Self, SessionError> {
        default_path().map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(SessionError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if map.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(SessionError::Storage(format!(
                    "delete {}: {e}",
                    self.path.display()
                ))),
            };
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::Storage(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Storage(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .read_map()?
            .remove(key)
            .filter(|value| !value.trim().is_empty()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

/// `~/.auras/session.json`.
///
/// # Errors
///
/// Returns [`SessionError::HomeNotFound`] if the home directory is unknown.
pub fn default_path() -> Result<PathBuf, SessionError> {
    dirs::home_dir()
        .map(|h| h.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME))
        .ok_or(SessionError::HomeNotFound)
}
