use auras_core::enums::{BurnoutRisk, SprintStatus};
use clap::{Args, Subcommand};

/// Sprint commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SprintCommands {
    /// List sprints.
    List {
        #[arg(long)]
        project: Option<String>,
    },
    /// Get a sprint by ID.
    Get { id: String },
    /// Create a sprint.
    Create(SprintFields),
    /// Update a sprint.
    Update {
        id: String,
        #[command(flatten)]
        fields: SprintFields,
    },
    /// Delete a sprint.
    Delete { id: String },
}

/// Sprint fields; unset ones are left out of the request.
#[derive(Clone, Debug, Args)]
pub struct SprintFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub status: Option<SprintStatus>,
    #[arg(long)]
    pub velocity: Option<f64>,
    #[arg(long)]
    pub burnout_risk: Option<BurnoutRisk>,
}
