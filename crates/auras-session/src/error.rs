use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("home directory not found — cannot locate session file")]
    HomeNotFound,

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("session data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
