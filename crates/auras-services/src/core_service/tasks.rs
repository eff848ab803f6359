use auras_client::segment;
use auras_core::entities::{Task, TaskDraft, TaskFilter};
use serde::Deserialize;
use serde::de::IgnoredAny;

use super::CoreService;
use crate::error::{ServiceError, empty_on_error, fail};

#[derive(Deserialize)]
struct TasksEnvelope {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

impl CoreService {
    /// `GET /api/tasks` with the set fields of `filter` as query parameters.
    /// Empty on any failure, including an unreachable service.
    pub async fn get_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        let result = self
            .client
            .get_with_query::<_, Option<TasksEnvelope>>("/api/tasks", filter)
            .await
            .map(|r| r.data.and_then(|e| e.tasks).unwrap_or_default());
        empty_on_error("get_tasks", result)
    }

    /// `GET /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to fetch task".
    pub async fn get_task(&self, id: &str) -> Result<Task, ServiceError> {
        self.client
            .get::<TaskEnvelope>(&format!("/api/tasks/{}", segment(id)))
            .await
            .map(|r| r.data.task)
            .map_err(fail("get_task", "Failed to fetch task"))
    }

    /// `POST /api/tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to create task".
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ServiceError> {
        self.client
            .post::<_, TaskEnvelope>("/api/tasks", draft)
            .await
            .map(|r| r.data.task)
            .map_err(fail("create_task", "Failed to create task"))
    }

    /// `PUT /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to update task".
    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<Task, ServiceError> {
        self.client
            .put::<_, TaskEnvelope>(&format!("/api/tasks/{}", segment(id)), draft)
            .await
            .map(|r| r.data.task)
            .map_err(fail("update_task", "Failed to update task"))
    }

    /// `DELETE /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Failed to delete task".
    pub async fn delete_task(&self, id: &str) -> Result<(), ServiceError> {
        self.client
            .delete::<IgnoredAny>(&format!("/api/tasks/{}", segment(id)))
            .await
            .map(|_| ())
            .map_err(fail("delete_task", "Failed to delete task"))
    }
}
