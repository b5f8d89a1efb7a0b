//! Activity and career models for the about/timeline pages.

use serde::{Deserialize, Serialize};

/// A one-off activity (talk, contribution, award).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    pub started_at: String,
    /// Empty string means the activity is ongoing.
    #[serde(default)]
    pub ended_at: String,
}

/// An employment entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub organization_name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    pub started_at: String,
    /// Empty string means the position is current.
    #[serde(default)]
    pub ended_at: String,
}
