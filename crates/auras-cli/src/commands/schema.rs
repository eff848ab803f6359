use anyhow::bail;
use auras_core::entities::{
    ChatMessage, DiscussionLoop, ExecutionHealth, GhostAction, Meeting, Project, ProjectDraft,
    Sprint, SprintDraft, Task, TaskDraft, TaskFilter, User,
};
use auras_core::payloads::{
    Acknowledgement, AuthResponse, ChatRequest, ChatResponse, LoginCredentials, SignupData,
    SummaryRequest, SummaryResponse,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `auras schema`.
pub const TYPE_NAMES: &[&str] = &[
    "user",
    "project",
    "project-draft",
    "task",
    "task-draft",
    "task-filter",
    "sprint",
    "sprint-draft",
    "chat-message",
    "execution-health",
    "discussion-loop",
    "ghost-action",
    "meeting",
    "login-credentials",
    "signup-data",
    "auth-response",
    "acknowledgement",
    "chat-request",
    "chat-response",
    "summary-request",
    "summary-response",
];

/// Handle `auras schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_by_name(&args.type_name) else {
        bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> Option<Schema> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    let schema = match normalized.as_str() {
        "user" => schema_for!(User),
        "project" => schema_for!(Project),
        "project-draft" => schema_for!(ProjectDraft),
        "task" => schema_for!(Task),
        "task-draft" => schema_for!(TaskDraft),
        "task-filter" => schema_for!(TaskFilter),
        "sprint" => schema_for!(Sprint),
        "sprint-draft" => schema_for!(SprintDraft),
        "chat-message" => schema_for!(ChatMessage),
        "execution-health" => schema_for!(ExecutionHealth),
        "discussion-loop" => schema_for!(DiscussionLoop),
        "ghost-action" => schema_for!(GhostAction),
        "meeting" => schema_for!(Meeting),
        "login-credentials" => schema_for!(LoginCredentials),
        "signup-data" => schema_for!(SignupData),
        "auth-response" => schema_for!(AuthResponse),
        "acknowledgement" => schema_for!(Acknowledgement),
        "chat-request" => schema_for!(ChatRequest),
        "chat-response" => schema_for!(ChatResponse),
        "summary-request" => schema_for!(SummaryRequest),
        "summary-response" => schema_for!(SummaryResponse),
        _ => return None,
    };
    Some(schema)
}
