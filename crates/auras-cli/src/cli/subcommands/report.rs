use auras_core::enums::MeetingStatus;
use auras_services::DEFAULT_GHOST_ACTION_LIMIT;
use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Sprint progress and task health counts.
    ExecutionHealth {
        #[arg(long)]
        sprint: Option<String>,
    },
    /// Open discussion loops.
    DiscussionLoops,
    /// Recent autonomous actions.
    GhostActions {
        #[arg(long, default_value_t = DEFAULT_GHOST_ACTION_LIMIT)]
        limit: u32,
    },
    /// Meetings, optionally by status.
    Meetings {
        #[arg(long)]
        status: Option<MeetingStatus>,
    },
    /// Sprint velocity metrics.
    Velocity {
        #[arg(long)]
        sprint: Option<String>,
    },
    /// Team burnout risk.
    BurnoutRisk {
        #[arg(long)]
        team: Option<String>,
    },
    /// Generate the weekly report.
    Weekly {
        #[arg(long)]
        project: Option<String>,
    },
}
