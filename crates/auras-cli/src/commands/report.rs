use auras_services::Services;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::output::output;

/// Handle `auras report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    services: &Services,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reports = &services.reports;
    match action {
        ReportCommands::ExecutionHealth { sprint } => output(
            &reports.get_execution_health(sprint.as_deref()).await?,
            flags.format,
        ),
        ReportCommands::DiscussionLoops => output(&reports.get_discussion_loops().await, flags.format),
        ReportCommands::GhostActions { limit } => {
            output(&reports.get_ghost_actions(*limit).await, flags.format)
        }
        ReportCommands::Meetings { status } => output(&reports.get_meetings(*status).await, flags.format),
        ReportCommands::Velocity { sprint } => output(
            &reports.get_velocity_metrics(sprint.as_deref()).await?,
            flags.format,
        ),
        ReportCommands::BurnoutRisk { team } => {
            output(&reports.get_burnout_risk(team.as_deref()).await?, flags.format)
        }
        ReportCommands::Weekly { project } => output(
            &reports.generate_weekly_report(project.as_deref()).await?,
            flags.format,
        ),
    }
}
