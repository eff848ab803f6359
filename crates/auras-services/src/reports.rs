//! Dashboards and reports from the reports service.

use auras_client::ServiceClient;
use auras_core::entities::{DiscussionLoop, ExecutionHealth, GhostAction, Meeting};
use auras_core::enums::MeetingStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ServiceError, empty_on_error, fail};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SprintQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sprint_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<&'a str>,
}

#[derive(Serialize)]
struct StatusQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<MeetingStatus>,
}

#[derive(Serialize)]
struct LimitQuery {
    limit: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeeklyReportRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct HealthEnvelope {
    data: ExecutionHealth,
}

#[derive(Deserialize)]
struct LoopsEnvelope {
    #[serde(default)]
    loops: Option<Vec<DiscussionLoop>>,
}

#[derive(Deserialize)]
struct ActionsEnvelope {
    #[serde(default)]
    actions: Option<Vec<GhostAction>>,
}

#[derive(Deserialize)]
struct MeetingsEnvelope {
    #[serde(default)]
    meetings: Option<Vec<Meeting>>,
}

#[derive(Debug, Clone)]
pub struct ReportsService {
    client: ServiceClient,
}

impl ReportsService {
    #[must_use]
    pub const fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// `GET /api/reports/execution-health`, optionally for one sprint.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or
    /// "Failed to fetch execution health".
    pub async fn get_execution_health(
        &self,
        sprint_id: Option<&str>,
    ) -> Result<ExecutionHealth, ServiceError> {
        self.client
            .get_with_query::<_, HealthEnvelope>(
                "/api/reports/execution-health",
                &SprintQuery { sprint_id },
            )
            .await
            .map(|r| r.data.data)
            .map_err(fail("get_execution_health", "Failed to fetch execution health"))
    }

    /// `GET /api/reports/discussion-loops`. Empty on any failure.
    pub async fn get_discussion_loops(&self) -> Vec<DiscussionLoop> {
        let result = self
            .client
            .get::<Option<LoopsEnvelope>>("/api/reports/discussion-loops")
            .await
            .map(|r| r.data.and_then(|e| e.loops).unwrap_or_default());
        empty_on_error("get_discussion_loops", result)
    }

    /// `GET /api/reports/ghost-actions?limit=`. Empty on any failure.
    pub async fn get_ghost_actions(&self, limit: u32) -> Vec<GhostAction> {
        let result = self
            .client
            .get_with_query::<_, Option<ActionsEnvelope>>(
                "/api/reports/ghost-actions",
                &LimitQuery { limit },
            )
            .await
            .map(|r| r.data.and_then(|e| e.actions).unwrap_or_default());
        empty_on_error("get_report_ghost_actions", result)
    }

    /// `GET /api/reports/meetings`, optionally filtered by status. Empty on any failure.
    pub async fn get_meetings(&self, status: Option<MeetingStatus>) -> Vec<Meeting> {
        let result = self
            .client
            .get_with_query::<_, Option<MeetingsEnvelope>>(
                "/api/reports/meetings",
                &StatusQuery { status },
            )
            .await
            .map(|r| r.data.and_then(|e| e.meetings).unwrap_or_default());
        empty_on_error("get_meetings", result)
    }

    /// `GET /api/reports/velocity`. Returns the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or
    /// "Failed to fetch velocity metrics".
    pub async fn get_velocity_metrics(&self, sprint_id: Option<&str>) -> Result<Value, ServiceError> {
        self.client
            .get_with_query("/api/reports/velocity", &SprintQuery { sprint_id })
            .await
            .map(|r| r.data)
            .map_err(fail("get_velocity_metrics", "Failed to fetch velocity metrics"))
    }

    /// `GET /api/reports/burnout-risk`. Returns the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or
    /// "Failed to fetch burnout risk".
    pub async fn get_burnout_risk(&self, team_id: Option<&str>) -> Result<Value, ServiceError> {
        self.client
            .get_with_query("/api/reports/burnout-risk", &TeamQuery { team_id })
            .await
            .map(|r| r.data)
            .map_err(fail("get_burnout_risk", "Failed to fetch burnout risk"))
    }

    /// `POST /api/reports/weekly`. Returns the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or
    /// "Failed to generate weekly report".
    pub async fn generate_weekly_report(&self, project_id: Option<&str>) -> Result<Value, ServiceError> {
        self.client
            .post("/api/reports/weekly", &WeeklyReportRequest { project_id })
            .await
            .map(|r| r.data)
            .map_err(fail("generate_weekly_report", "Failed to generate weekly report"))
    }
}
