//! Status and kind enums exchanged with the AURAS services.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the same wire name, and `FromStr` accepts it back so
//! the CLI can take enum values as plain arguments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `as_str`, `ALL`, `Display` and `FromStr` from one variant table.
macro_rules! wire_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the wire name of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(CoreError::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a project in the core service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

wire_names!(ProjectStatus, "project status", {
    Active => "active",
    Completed => "completed",
    Archived => "archived",
});

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// The core service owns transitions; the client accepts any value it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Blocked,
    Completed,
}

wire_names!(TaskStatus, "task status", {
    Todo => "todo",
    InProgress => "in_progress",
    Blocked => "blocked",
    Completed => "completed",
});

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

wire_names!(TaskPriority, "task priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

// ---------------------------------------------------------------------------
// SprintStatus
// ---------------------------------------------------------------------------

/// Status of a sprint.
///
/// ```text
/// planning → active → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SprintStatus {
    Planning,
    Active,
    Completed,
}

wire_names!(SprintStatus, "sprint status", {
    Planning => "planning",
    Active => "active",
    Completed => "completed",
});

// ---------------------------------------------------------------------------
// BurnoutRisk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BurnoutRisk {
    Low,
    Medium,
    High,
}

wire_names!(BurnoutRisk, "burnout risk", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Ai,
}

wire_names!(ChatRole, "chat role", {
    User => "user",
    Ai => "ai",
});

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Rendering hint attached to an AI answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Table,
    List,
    Chart,
}

wire_names!(Widget, "widget", {
    Table => "table",
    List => "list",
    Chart => "chart",
});

// ---------------------------------------------------------------------------
// SummaryKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Sprint,
    Weekly,
    Meeting,
}

wire_names!(SummaryKind, "summary kind", {
    Sprint => "sprint",
    Weekly => "weekly",
    Meeting => "meeting",
});

// ---------------------------------------------------------------------------
// LoopStatus
// ---------------------------------------------------------------------------

/// State of a discussion loop tracked by the reports service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoopStatus {
    Stalled,
    Circling,
    Resolved,
}

wire_names!(LoopStatus, "loop status", {
    Stalled => "stalled",
    Circling => "circling",
    Resolved => "resolved",
});

// ---------------------------------------------------------------------------
// GhostActionKind
// ---------------------------------------------------------------------------

/// Kind of autonomous action the assistant took on the user's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GhostActionKind {
    Nudge,
    Update,
    Escalation,
    Summary,
}

wire_names!(GhostActionKind, "ghost action kind", {
    Nudge => "nudge",
    Update => "update",
    Escalation => "escalation",
    Summary => "summary",
});

// ---------------------------------------------------------------------------
// MeetingStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    Live,
    Completed,
}

wire_names!(MeetingStatus, "meeting status", {
    Scheduled => "scheduled",
    Live => "live",
    Completed => "completed",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_name() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for kind in GhostActionKind::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn from_str_accepts_wire_names() {
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("critical".parse::<TaskPriority>().unwrap(), TaskPriority::Critical);
        assert_eq!("ai".parse::<ChatRole>().unwrap(), ChatRole::Ai);
    }

    #[test]
    fn from_str_rejects_unknown_and_lists_choices() {
        let err = "done".parse::<TaskStatus>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("task status"));
        assert!(message.contains("todo, in_progress, blocked, completed"));
    }

    #[test]
    fn priorities_order_by_severity() {
        assert!(TaskPriority::Critical > TaskPriority::High);
        assert!(BurnoutRisk::Low < BurnoutRisk::Medium);
    }
}
