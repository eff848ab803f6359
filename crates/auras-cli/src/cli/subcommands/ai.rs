use auras_core::enums::SummaryKind;
use auras_services::DEFAULT_GHOST_ACTION_LIMIT;
use clap::Subcommand;

/// AI commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AiCommands {
    /// Generate a sprint, weekly or meeting summary.
    Summary {
        kind: SummaryKind,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        sprint: Option<String>,
        #[arg(long)]
        meeting: Option<String>,
    },
    /// Analyze the health of a sprint.
    AnalyzeSprint { sprint_id: String },
    /// Analyze burnout for a team, or everyone.
    AnalyzeBurnout {
        #[arg(long)]
        team: Option<String>,
    },
    /// Suggested next questions.
    Suggestions {
        #[arg(long)]
        project: Option<String>,
    },
    /// Actions the assistant took on its own.
    GhostActions {
        #[arg(long, default_value_t = DEFAULT_GHOST_ACTION_LIMIT)]
        limit: u32,
    },
}
