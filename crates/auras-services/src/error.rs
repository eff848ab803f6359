//! Service-level failure type.

use auras_client::ApiError;
use thiserror::Error;

/// A failed domain operation.
///
/// `message` is the server's own `message` field when the response carried
/// one, otherwise the operation's fixed fallback text ("Login failed",
/// "Failed to fetch task", ...). The underlying [`ApiError`] is kept as the
/// source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
    /// HTTP status, when a response arrived.
    pub status: Option<u16>,
    #[source]
    pub source: ApiError,
}

impl ServiceError {
    /// Wrap `error`, preferring the server message over `fallback`.
    #[must_use]
    pub fn from_api(error: ApiError, fallback: &str) -> Self {
        let message = error.server_message().unwrap_or(fallback).to_string();
        Self {
            message,
            status: error.status(),
            source: error,
        }
    }

    /// Wrap `error` with `message`, ignoring any server message.
    #[must_use]
    pub fn with_message(error: ApiError, message: &str) -> Self {
        Self {
            message: message.to_string(),
            status: error.status(),
            source: error,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.source.is_unauthorized()
    }
}

/// Log a propagated failure and convert it.
pub(crate) fn fail(operation: &'static str, fallback: &'static str) -> impl FnOnce(ApiError) -> ServiceError {
    move |error| {
        tracing::error!(operation, %error, "request failed");
        ServiceError::from_api(error, fallback)
    }
}

/// Log a swallowed list failure and yield an empty list.
pub(crate) fn empty_on_error<T>(operation: &'static str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|error| {
        tracing::warn!(operation, %error, "list request failed; returning empty list");
        Vec::new()
    })
}
