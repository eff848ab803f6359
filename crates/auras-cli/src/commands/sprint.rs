use auras_core::entities::SprintDraft;
use auras_services::Services;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SprintCommands;
use crate::cli::subcommands::sprint::SprintFields;
use crate::commands::project::Deleted;
use crate::output::output;

/// Handle `auras sprint <subcommand>`.
pub async fn handle(
    action: &SprintCommands,
    services: &Services,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let core = &services.core;
    match action {
        SprintCommands::List { project } => {
            output(&core.get_sprints(project.as_deref()).await, flags.format)
        }
        SprintCommands::Get { id } => output(&core.get_sprint(id).await?, flags.format),
        SprintCommands::Create(fields) => {
            output(&core.create_sprint(&draft(fields)).await?, flags.format)
        }
        SprintCommands::Update { id, fields } => {
            output(&core.update_sprint(id, &draft(fields)).await?, flags.format)
        }
        SprintCommands::Delete { id } => {
            core.delete_sprint(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn draft(fields: &SprintFields) -> SprintDraft {
    SprintDraft {
        name: fields.name.clone(),
        project_id: fields.project.clone(),
        start_date: fields.start.clone(),
        end_date: fields.end.clone(),
        status: fields.status,
        velocity: fields.velocity,
        burnout_risk: fields.burnout_risk,
    }
}
