use auras_core::entities::{TaskDraft, TaskFilter};
use auras_services::Services;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::cli::subcommands::task::{TaskCreateArgs, TaskUpdateArgs};
use crate::commands::project::Deleted;
use crate::output::output;

/// Handle `auras task <subcommand>`.
pub async fn handle(
    action: &TaskCommands,
    services: &Services,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let core = &services.core;
    match action {
        TaskCommands::List(args) => {
            let filter = TaskFilter {
                project_id: args.project.clone(),
                status: args.status,
                assignee: args.assignee.clone(),
            };
            output(&core.get_tasks(&filter).await, flags.format)
        }
        TaskCommands::Get { id } => output(&core.get_task(id).await?, flags.format),
        TaskCommands::Create(args) => {
            output(&core.create_task(&create_draft(args)).await?, flags.format)
        }
        TaskCommands::Update(args) => {
            output(&core.update_task(&args.id, &update_draft(args)).await?, flags.format)
        }
        TaskCommands::Delete { id } => {
            core.delete_task(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

fn create_draft(args: &TaskCreateArgs) -> TaskDraft {
    TaskDraft {
        title: Some(args.title.clone()),
        description: args.description.clone(),
        status: args.status,
        priority: args.priority,
        assignee: args.assignee.clone(),
        project_id: Some(args.project.clone()),
        sprint_id: args.sprint.clone(),
        due_date: args.due.clone(),
    }
}

fn update_draft(args: &TaskUpdateArgs) -> TaskDraft {
    TaskDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        status: args.status,
        priority: args.priority,
        assignee: args.assignee.clone(),
        project_id: None,
        sprint_id: args.sprint.clone(),
        due_date: args.due.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auras_core::enums::TaskStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn update_draft_only_carries_given_flags() {
        let args = TaskUpdateArgs {
            id: "t-1".into(),
            title: None,
            description: None,
            status: Some(TaskStatus::Blocked),
            priority: None,
            assignee: None,
            sprint: None,
            due: None,
        };
        assert_eq!(
            serde_json::to_value(update_draft(&args)).unwrap(),
            serde_json::json!({"status": "blocked"})
        );
    }
}
