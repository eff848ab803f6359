//! Request and response bodies for the auth and AI endpoints.
//!
//! Entity envelopes (`{success, tasks}` and friends) are private to the
//! services that unwrap them; only payloads a caller builds or receives
//! whole are defined here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::enums::{SummaryKind, Widget};

// ── Auth ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body returned by login, signup and Google login.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl AuthResponse {
    /// The server accepted the credentials and issued a non-empty token.
    #[must_use]
    pub fn grants_session(&self) -> bool {
        self.success && !self.token.is_empty()
    }
}

/// `{success, message}` reply used by the password-reset endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// ── AI ─────────────────────────────────────────────────────────────

/// Optional scoping for a chat question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ChatContext>,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: ChatContext) -> Self {
        self.context = Some(context);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(rename = "type")]
    pub kind: SummaryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SummaryResponse {
    #[serde(default)]
    pub success: bool,
    pub summary: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn signup_omits_missing_role() {
        let data = SignupData {
            name: "A".into(),
            email: "a@b.com".into(),
            password: "x".into(),
            role: None,
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "A", "email": "a@b.com", "password": "x"})
        );
    }

    #[test]
    fn auth_response_without_token_does_not_grant_session() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success": true, "token": ""}"#).unwrap();
        assert!(!resp.grants_session());

        let resp: AuthResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.grants_session());
    }

    #[test]
    fn summary_request_uses_type_key_and_camel_case() {
        let req = SummaryRequest {
            kind: SummaryKind::Sprint,
            project_id: None,
            sprint_id: Some("s-1".into()),
            meeting_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"type": "sprint", "sprintId": "s-1"}));
    }

    #[test]
    fn chat_response_tolerates_missing_optionals() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"success": true, "message": "hi"}"#).unwrap();
        assert_eq!(resp.widget, None);
        assert!(resp.suggestions.is_empty());
    }
}
