use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ChatRole, Widget};
use crate::errors::CoreError;
use crate::ids::random_id;
use crate::payloads::ChatResponse;

/// One entry in a local chat transcript.
///
/// User messages are created client-side; AI messages are built from the
/// AI service's [`ChatResponse`], carrying its widget hint and data along.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ChatMessage {
    /// A message typed by the user, stamped now.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdGeneration`] if no id can be generated.
    pub fn user(content: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            id: random_id()?,
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            widget: None,
            data: None,
        })
    }

    /// An AI answer, stamped now.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdGeneration`] if no id can be generated.
    pub fn ai(content: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            role: ChatRole::Ai,
            ..Self::user(content)?
        })
    }

    /// Build the AI side of an exchange from a chat response.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdGeneration`] if no id can be generated.
    pub fn from_response(response: &ChatResponse) -> Result<Self, CoreError> {
        Ok(Self {
            widget: response.widget,
            data: response.data.clone(),
            ..Self::ai(response.message.clone())?
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_no_widget() {
        let msg = ChatMessage::user("what's blocking sprint 4?").unwrap();
        assert_eq!(msg.role, ChatRole::User);
        assert!(msg.widget.is_none());
        assert_eq!(msg.id.len(), 32);
    }

    #[test]
    fn from_response_carries_widget_and_data() {
        let response = ChatResponse {
            success: true,
            message: "Three tasks are blocked.".into(),
            widget: Some(Widget::Table),
            data: Some(serde_json::json!([{"id": "t-1"}])),
            suggestions: vec![],
        };
        let msg = ChatMessage::from_response(&response).unwrap();
        assert_eq!(msg.role, ChatRole::Ai);
        assert_eq!(msg.content, "Three tasks are blocked.");
        assert_eq!(msg.widget, Some(Widget::Table));
        assert_eq!(msg.data, response.data);
    }

    #[test]
    fn serializes_role_as_type() {
        let msg = ChatMessage::ai("ok").unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "ai");
        assert!(value.get("widget").is_none());
    }
}
