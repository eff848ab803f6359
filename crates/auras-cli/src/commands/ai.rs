use auras_core::payloads::SummaryRequest;
use auras_services::Services;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AiCommands;
use crate::output::output;

/// Handle `auras ai <subcommand>`.
pub async fn handle(action: &AiCommands, services: &Services, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ai = &services.ai;
    match action {
        AiCommands::Summary {
            kind,
            project,
            sprint,
            meeting,
        } => {
            let request = SummaryRequest {
                kind: *kind,
                project_id: project.clone(),
                sprint_id: sprint.clone(),
                meeting_id: meeting.clone(),
            };
            output(&ai.generate_summary(&request).await?, flags.format)
        }
        AiCommands::AnalyzeSprint { sprint_id } => {
            output(&ai.analyze_sprint_health(sprint_id).await?, flags.format)
        }
        AiCommands::AnalyzeBurnout { team } => {
            output(&ai.analyze_burnout(team.as_deref()).await?, flags.format)
        }
        AiCommands::Suggestions { project } => {
            output(&ai.get_suggestions(project.as_deref()).await, flags.format)
        }
        AiCommands::GhostActions { limit } => {
            output(&ai.get_ghost_actions(*limit).await, flags.format)
        }
    }
}
