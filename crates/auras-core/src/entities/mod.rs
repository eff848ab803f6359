//! Entity structs for the AURAS domain objects.
//!
//! Projects, tasks and sprints are owned by the core service; report widgets
//! by the reports service. [`ChatMessage`] is client-local. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod chat;
mod project;
mod report;
mod sprint;
mod task;
mod user;

pub use chat::ChatMessage;
pub use project::{Project, ProjectDraft};
pub use report::{DiscussionLoop, ExecutionHealth, GhostAction, Meeting};
pub use sprint::{Sprint, SprintDraft};
pub use task::{Task, TaskDraft, TaskFilter};
pub use user::User;
