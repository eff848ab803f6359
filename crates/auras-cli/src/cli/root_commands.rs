use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AiCommands, AuthCommands, ProjectCommands, ReportCommands, SprintCommands, TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and password reset.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Sprints.
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },
    /// Ask Liaison a question.
    Chat(ChatArgs),
    /// Summaries, analyses and suggestions.
    Ai {
        #[command(subcommand)]
        action: AiCommands,
    },
    /// Dashboard reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Dump the JSON schema of a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `auras chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// The question or instruction.
    pub message: String,
    /// Print the answer as it streams in.
    #[arg(long)]
    pub stream: bool,
    #[arg(long)]
    pub project_id: Option<String>,
    #[arg(long)]
    pub sprint_id: Option<String>,
}

/// Arguments for `auras schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name (e.g. `task`, `sprint-draft`, `chat-response`).
    pub type_name: String,
}
