//! Chat, summaries and analyses from the AI service.

use auras_client::{ApiError, ServiceClient, collect_text};
use auras_core::entities::GhostAction;
use auras_core::payloads::{ChatRequest, ChatResponse, SummaryRequest, SummaryResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ServiceError, empty_on_error, fail};

/// Number of ghost actions fetched when the caller does not say.
pub const DEFAULT_GHOST_ACTION_LIMIT: u32 = 10;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SprintRef<'a> {
    sprint_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
}

#[derive(Serialize)]
struct LimitQuery {
    limit: u32,
}

#[derive(Deserialize)]
struct SuggestionsEnvelope {
    #[serde(default)]
    suggestions: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ActionsEnvelope {
    #[serde(default)]
    actions: Option<Vec<GhostAction>>,
}

#[derive(Debug, Clone)]
pub struct AiService {
    client: ServiceClient,
}

impl AiService {
    #[must_use]
    pub const fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// `POST /api/chat`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to send message".
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError> {
        self.client
            .post("/api/chat", request)
            .await
            .map(|r| r.data)
            .map_err(fail("send_message", "Failed to send message"))
    }

    /// `POST /api/chat/stream`, handing each received chunk to `on_chunk` as
    /// it arrives. Chunks are decoded as UTF-8 one by one (invalid bytes are
    /// replaced) and never buffered or re-split.
    ///
    /// Returns the full text once the server closes the stream.
    ///
    /// # Errors
    ///
    /// Any failure, before or during the stream, is reported as
    /// "Failed to stream message"; chunks already delivered stay delivered.
    pub async fn send_message_stream<F>(
        &self,
        request: &ChatRequest,
        on_chunk: F,
    ) -> Result<String, ServiceError>
    where
        F: FnMut(&str),
    {
        const MESSAGE: &str = "Failed to stream message";
        let report = |error: ApiError| {
            tracing::error!(operation = "send_message_stream", %error, "request failed");
            ServiceError::with_message(error, MESSAGE)
        };

        let stream = self
            .client
            .post_stream("/api/chat/stream", request)
            .await
            .map_err(report)?;
        collect_text(stream, on_chunk).await.map_err(report)
    }

    /// `POST /api/summary`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to generate summary".
    pub async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, ServiceError> {
        self.client
            .post("/api/summary", request)
            .await
            .map(|r| r.data)
            .map_err(fail("generate_summary", "Failed to generate summary"))
    }

    /// `POST /api/analyze/sprint`. The analysis shape is owned by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to analyze sprint".
    pub async fn analyze_sprint_health(&self, sprint_id: &str) -> Result<Value, ServiceError> {
        self.client
            .post("/api/analyze/sprint", &SprintRef { sprint_id })
            .await
            .map(|r| r.data)
            .map_err(fail("analyze_sprint_health", "Failed to analyze sprint"))
    }

    /// `POST /api/analyze/burnout`, for one team or everyone.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to analyze burnout".
    pub async fn analyze_burnout(&self, team_id: Option<&str>) -> Result<Value, ServiceError> {
        self.client
            .post("/api/analyze/burnout", &TeamRef { team_id })
            .await
            .map(|r| r.data)
            .map_err(fail("analyze_burnout", "Failed to analyze burnout"))
    }

    /// `GET /api/suggestions`. Empty on any failure.
    pub async fn get_suggestions(&self, project_id: Option<&str>) -> Vec<String> {
        let result = self
            .client
            .get_with_query::<_, Option<SuggestionsEnvelope>>(
                "/api/suggestions",
                &SuggestionQuery { project_id },
            )
            .await
            .map(|r| r.data.and_then(|e| e.suggestions).unwrap_or_default());
        empty_on_error("get_suggestions", result)
    }

    /// `GET /api/ghost-actions?limit=`. Empty on any failure.
    pub async fn get_ghost_actions(&self, limit: u32) -> Vec<GhostAction> {
        let result = self
            .client
            .get_with_query::<_, Option<ActionsEnvelope>>("/api/ghost-actions", &LimitQuery { limit })
            .await
            .map(|r| r.data.and_then(|e| e.actions).unwrap_or_default());
        empty_on_error("get_ghost_actions", result)
    }
}
