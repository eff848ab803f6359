//! Client error types.

use auras_core::ServiceKind;
use auras_session::SessionError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to an AURAS service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL does not parse.
    #[error("invalid base URL '{url}' for {service} service: {reason}")]
    InvalidUrl {
        service: ServiceKind,
        url: String,
        reason: String,
    },

    /// Connection, TLS, timeout or other transport failure; no response arrived.
    #[error("{service} request failed: {source}")]
    Transport {
        service: ServiceKind,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{service} service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        service: ServiceKind,
        status: u16,
        /// The `message` field of the error body, when the server sent one.
        message: Option<String>,
        /// The error body, parsed as JSON when possible, else as a string.
        body: Option<Value>,
    },

    /// A success response did not match the expected shape.
    #[error("{service} response for {path} could not be decoded: {message}")]
    Decode {
        service: ServiceKind,
        path: String,
        message: String,
    },

    /// A streamed body broke off after the response started.
    #[error("{service} stream failed: {message}")]
    Stream {
        service: ServiceKind,
        message: String,
    },

    /// The response was fine but the session could not be updated from it.
    #[error("{service} session update failed: {source}")]
    Session {
        service: ServiceKind,
        #[source]
        source: SessionError,
    },
}

impl ApiError {
    #[must_use]
    pub const fn service(&self) -> ServiceKind {
        match self {
            Self::InvalidUrl { service, .. }
            | Self::Transport { service, .. }
            | Self::Status { service, .. }
            | Self::Decode { service, .. }
            | Self::Stream { service, .. }
            | Self::Session { service, .. } => *service,
        }
    }

    /// HTTP status of the response, if one arrived.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-provided error message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Pull a non-empty `message` string out of an error body.
pub(crate) fn message_from_body(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
