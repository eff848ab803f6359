use auras_core::entities::ProjectDraft;
use auras_services::Services;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::output::output;

#[derive(Serialize)]
pub struct Deleted<'a> {
    pub deleted: &'a str,
}

/// Handle `auras project <subcommand>`.
pub async fn handle(
    action: &ProjectCommands,
    services: &Services,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let core = &services.core;
    match action {
        ProjectCommands::List => output(&core.get_projects().await, flags.format),
        ProjectCommands::Get { id } => output(&core.get_project(id).await?, flags.format),
        ProjectCommands::Create {
            name,
            description,
            status,
        } => {
            let draft = ProjectDraft {
                name: Some(name.clone()),
                description: description.clone(),
                status: *status,
            };
            output(&core.create_project(&draft).await?, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            status,
        } => {
            let draft = ProjectDraft {
                name: name.clone(),
                description: description.clone(),
                status: *status,
            };
            output(&core.update_project(id, &draft).await?, flags.format)
        }
        ProjectCommands::Delete { id } => {
            core.delete_project(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}
