use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BurnoutRisk, SprintStatus};

/// A time-boxed iteration of a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: SprintStatus,
    /// Story points completed per sprint.
    #[serde(default)]
    pub velocity: f64,
    pub burnout_risk: BurnoutRisk,
}

/// Partial sprint body for create and update calls. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SprintStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burnout_risk: Option<BurnoutRisk>,
}
