//! Entries domain models.

use serde::{Deserialize, Serialize};

/// A single gratitude record.
///
/// Entries are immutable once created; the only lifecycle transition after
/// insert is deletion. `timestamp` is nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GratitudeEntry {
    pub id: i64,
    pub text: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input model for creating a new entry.
///
/// The id is assigned by the store at insert; the timestamp is assigned by
/// the service before it reaches the repository.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub text: String,
    pub timestamp: i64,
    pub category: Option<String>,
}
