pub mod ai;
pub mod auth;
pub mod chat;
pub mod project;
pub mod report;
pub mod schema;
pub mod sprint;
pub mod task;

use auras_services::Services;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, services: &Services, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(action, services, flags).await,
        Commands::Project { action } => project::handle(action, services, flags).await,
        Commands::Task { action } => task::handle(action, services, flags).await,
        Commands::Sprint { action } => sprint::handle(action, services, flags).await,
        Commands::Chat(args) => chat::handle(args, services, flags).await,
        Commands::Ai { action } => ai::handle(action, services, flags).await,
        Commands::Report { action } => report::handle(action, services, flags).await,
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
