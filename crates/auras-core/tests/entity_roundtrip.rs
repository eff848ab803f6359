//! Serde roundtrip, wire-shape and JsonSchema validation tests for entity types.

use auras_core::entities::*;
use auras_core::enums::*;
use auras_core::payloads::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn stamp() -> String {
    "2025-03-14T09:30:00Z".into()
}

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: "p-1".into(),
        name: "Liaison".into(),
        description: "Executive assistant".into(),
        status: ProjectStatus::Active,
        created_at: stamp(),
        updated_at: stamp(),
    }
);

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "t-1".into(),
        title: "Wire auth".into(),
        description: String::new(),
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee: Some("sam".into()),
        project_id: "p-1".into(),
        sprint_id: None,
        created_at: stamp(),
        updated_at: stamp(),
        due_date: Some("2025-03-21".into()),
    }
);

roundtrip_and_validate!(
    sprint_roundtrip,
    Sprint,
    Sprint {
        id: "s-4".into(),
        name: "Sprint 4".into(),
        project_id: "p-1".into(),
        start_date: "2025-03-10".into(),
        end_date: "2025-03-24".into(),
        status: SprintStatus::Active,
        velocity: 42.5,
        burnout_risk: BurnoutRisk::Medium,
    }
);

roundtrip_and_validate!(
    ghost_action_roundtrip,
    GhostAction,
    GhostAction {
        id: "g-1".into(),
        action: "Nudged design review".into(),
        timestamp: "2m ago".into(),
        kind: GhostActionKind::Nudge,
        target: Some("#design".into()),
    }
);

roundtrip_and_validate!(
    discussion_loop_roundtrip,
    DiscussionLoop,
    DiscussionLoop {
        id: "d-1".into(),
        topic: "Pricing tiers".into(),
        status: LoopStatus::Circling,
        participants: vec!["ana".into(), "raj".into()],
        last_updated: "yesterday".into(),
        escalated_to: None,
        eta_close: Some("Fri".into()),
    }
);

roundtrip_and_validate!(
    meeting_roundtrip,
    Meeting,
    Meeting {
        id: "m-1".into(),
        title: "Standup".into(),
        duration: 15,
        participants: 6,
        status: MeetingStatus::Live,
        audio_waveform: Some(vec![0.1, 0.6, 0.3]),
    }
);

roundtrip_and_validate!(
    execution_health_roundtrip,
    ExecutionHealth,
    ExecutionHealth {
        sprint_progress: 64.0,
        healthy: 12,
        at_risk: 3,
        blocked: 1,
        velocity_alert: Some("Velocity down 18%".into()),
    }
);

roundtrip_and_validate!(
    auth_response_roundtrip,
    AuthResponse,
    AuthResponse {
        success: true,
        token: "T1".into(),
        user: Some(User {
            id: "1".into(),
            name: "A".into(),
            email: "a@b.com".into(),
            role: "Founder".into(),
        }),
    }
);

#[test]
fn task_decodes_server_wire_shape() {
    let json = r#"{
        "id": "t-9",
        "title": "Ship weekly report",
        "description": "PDF export",
        "status": "blocked",
        "priority": "critical",
        "projectId": "p-1",
        "sprintId": "s-4",
        "createdAt": "2025-03-14T09:30:00Z",
        "updatedAt": "2025-03-14T09:30:00Z",
        "extra": "ignored"
    }"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.status, TaskStatus::Blocked);
    assert_eq!(task.priority, TaskPriority::Critical);
    assert_eq!(task.sprint_id.as_deref(), Some("s-4"));
    assert_eq!(task.assignee, None);
    assert_eq!(task.created_at, stamp());
}

#[test]
fn timestamps_in_other_formats_still_decode() {
    let json = r#"{
        "id": "p-2",
        "name": "Legacy",
        "status": "archived",
        "createdAt": "2025-03-14 09:30:00",
        "updatedAt": "1710408600"
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.created_at, "2025-03-14 09:30:00");
    assert_eq!(project.updated_at, "1710408600");
    assert_eq!(project.description, "");
}

#[test]
fn drafts_serialize_only_set_fields() {
    let draft = TaskDraft {
        status: Some(TaskStatus::Completed),
        ..TaskDraft::default()
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({"status": "completed"})
    );

    let sprint = SprintDraft {
        burnout_risk: Some(BurnoutRisk::High),
        project_id: Some("p-1".into()),
        ..SprintDraft::default()
    };
    assert_eq!(
        serde_json::to_value(&sprint).unwrap(),
        serde_json::json!({"projectId": "p-1", "burnoutRisk": "high"})
    );
}

#[test]
fn empty_task_filter_is_empty() {
    assert!(TaskFilter::default().is_empty());
    let filter = TaskFilter {
        assignee: Some("sam".into()),
        ..TaskFilter::default()
    };
    assert!(!filter.is_empty());
}
