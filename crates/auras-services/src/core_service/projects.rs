use auras_client::segment;
use auras_core::entities::{Project, ProjectDraft};
use serde::Deserialize;
use serde::de::IgnoredAny;

use super::CoreService;
use crate::error::{ServiceError, empty_on_error, fail};

#[derive(Deserialize)]
struct ProjectsEnvelope {
    #[serde(default)]
    projects: Option<Vec<Project>>,
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

impl CoreService {
    /// `GET /api/projects`. Empty on any failure.
    pub async fn get_projects(&self) -> Vec<Project> {
        let result = self
            .client
            .get::<Option<ProjectsEnvelope>>("/api/projects")
            .await
            .map(|r| r.data.and_then(|e| e.projects).unwrap_or_default());
        empty_on_error("get_projects", result)
    }

    /// `GET /api/projects/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to fetch project".
    pub async fn get_project(&self, id: &str) -> Result<Project, ServiceError> {
        self.client
            .get::<ProjectEnvelope>(&format!("/api/projects/{}", segment(id)))
            .await
            .map(|r| r.data.project)
            .map_err(fail("get_project", "Failed to fetch project"))
    }

    /// `POST /api/projects`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to create project".
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ServiceError> {
        self.client
            .post::<_, ProjectEnvelope>("/api/projects", draft)
            .await
            .map(|r| r.data.project)
            .map_err(fail("create_project", "Failed to create project"))
    }

    /// `PUT /api/projects/{id}` with only the fields set in `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to update project".
    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ServiceError> {
        self.client
            .put::<_, ProjectEnvelope>(&format!("/api/projects/{}", segment(id)), draft)
            .await
            .map(|r| r.data.project)
            .map_err(fail("update_project", "Failed to update project"))
    }

    /// `DELETE /api/projects/{id}`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to delete project".
    pub async fn delete_project(&self, id: &str) -> Result<(), ServiceError> {
        self.client
            .delete::<IgnoredAny>(&format!("/api/projects/{}", segment(id)))
            .await
            .map(|_| ())
            .map_err(fail("delete_project", "Failed to delete project"))
    }
}
