//! Widget payloads served by the reports service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GhostActionKind, LoopStatus, MeetingStatus};

/// Sprint execution snapshot: progress plus a count of tasks per health bucket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionHealth {
    /// Percentage of the sprint completed, `0..=100`.
    pub sprint_progress: f64,
    pub healthy: u32,
    pub at_risk: u32,
    pub blocked: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_alert: Option<String>,
}

/// A conversation thread that keeps resurfacing without a decision.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionLoop {
    pub id: String,
    pub topic: String,
    pub status: LoopStatus,
    #[serde(default)]
    pub participants: Vec<String>,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalated_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_close: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GhostAction {
    pub id: String,
    pub action: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: GhostActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    /// Length in minutes.
    pub duration: u32,
    /// Number of attendees.
    pub participants: u32,
    pub status: MeetingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_waveform: Option<Vec<f64>>,
}
