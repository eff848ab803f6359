use auras_client::segment;
use auras_core::entities::{Sprint, SprintDraft};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::CoreService;
use crate::error::{ServiceError, empty_on_error, fail};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SprintQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct SprintsEnvelope {
    #[serde(default)]
    sprints: Option<Vec<Sprint>>,
}

#[derive(Deserialize)]
struct SprintEnvelope {
    sprint: Sprint,
}

impl CoreService {
    /// `GET /api/sprints`, optionally scoped to one project. Empty on any failure.
    pub async fn get_sprints(&self, project_id: Option<&str>) -> Vec<Sprint> {
        let result = self
            .client
            .get_with_query::<_, Option<SprintsEnvelope>>("/api/sprints", &SprintQuery { project_id })
            .await
            .map(|r| r.data.and_then(|e| e.sprints).unwrap_or_default());
        empty_on_error("get_sprints", result)
    }

    /// `GET /api/sprints/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to fetch sprint".
    pub async fn get_sprint(&self, id: &str) -> Result<Sprint, ServiceError> {
        self.client
            .get::<SprintEnvelope>(&format!("/api/sprints/{}", segment(id)))
            .await
            .map(|r| r.data.sprint)
            .map_err(fail("get_sprint", "Failed to fetch sprint"))
    }

    /// `POST /api/sprints`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to create sprint".
    pub async fn create_sprint(&self, draft: &SprintDraft) -> Result<Sprint, ServiceError> {
        self.client
            .post::<_, SprintEnvelope>("/api/sprints", draft)
            .await
            .map(|r| r.data.sprint)
            .map_err(fail("create_sprint", "Failed to create sprint"))
    }

    /// `PUT /api/sprints/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to update sprint".
    pub async fn update_sprint(&self, id: &str, draft: &SprintDraft) -> Result<Sprint, ServiceError> {
        self.client
            .put::<_, SprintEnvelope>(&format!("/api/sprints/{}", segment(id)), draft)
            .await
            .map(|r| r.data.sprint)
            .map_err(fail("update_sprint", "Failed to update sprint"))
    }

    /// `DELETE /api/sprints/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to delete sprint".
    pub async fn delete_sprint(&self, id: &str) -> Result<(), ServiceError> {
        self.client
            .delete::<IgnoredAny>(&format!("/api/sprints/{}", segment(id)))
            .await
            .map(|_| ())
            .map_err(fail("delete_sprint", "Failed to delete sprint"))
    }
}
