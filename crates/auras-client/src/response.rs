//! Response envelope and body decoding.

use auras_core::ServiceKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, message_from_body};

/// A decoded success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

/// Decode a success body into `T`. An empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(
    service: ServiceKind,
    path: &str,
    bytes: &[u8],
) -> Result<T, ApiError> {
    let bytes = bytes.trim_ascii();
    let result = if bytes.is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|e| ApiError::Decode {
        service,
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Build an [`ApiError::Status`] from a non-success response, consuming its body.
pub(crate) async fn failure_from_response(
    service: ServiceKind,
    response: reqwest::Response,
) -> ApiError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(text) => parse_error_body(&text),
        Err(error) => {
            tracing::debug!(%service, status, %error, "could not read error body");
            None
        }
    };
    let message = body.as_ref().and_then(message_from_body);
    ApiError::Status {
        service,
        status,
        message,
        body,
    }
}

fn parse_error_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}
