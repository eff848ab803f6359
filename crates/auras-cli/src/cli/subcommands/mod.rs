pub mod ai;
pub mod auth;
pub mod project;
pub mod report;
pub mod sprint;
pub mod task;

pub use ai::AiCommands;
pub use auth::AuthCommands;
pub use project::ProjectCommands;
pub use report::ReportCommands;
pub use sprint::SprintCommands;
pub use task::TaskCommands;
