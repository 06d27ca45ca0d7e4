//! Goals domain models.

use serde::{Deserialize, Serialize};

/// A user-defined intention with a completion flag.
///
/// `completed` is the only field that may change after creation.
/// `created_at` is nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub text: String,
    pub created_at: i64,
    pub completed: bool,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub text: String,
    pub created_at: i64,
    pub completed: bool,
}
