use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Free-form role label (e.g. `Founder`, `PM`).
    #[serde(default)]
    pub role: String,
}
