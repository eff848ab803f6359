//! Projects, tasks and sprints on the core service.
//!
//! Each resource lives in its own file as an `impl CoreService` block.
//! List getters return an empty list on failure; single-entity getters and
//! mutations propagate [`ServiceError`](crate::ServiceError).

mod projects;
mod sprints;
mod tasks;

use auras_client::ServiceClient;

#[derive(Debug, Clone)]
pub struct CoreService {
    client: ServiceClient,
}

impl CoreService {
    #[must_use]
    pub const fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}
