//! Autosave draft model for the admin post editor.

use serde::{Deserialize, Serialize};

/// Autosave snapshot keyed by content id. Last write wins; entries older
/// than seven days are purged when the list is next enumerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub content_id: String,
    pub form_data: serde_json::Value,
    #[serde(default)]
    pub markdown_content: String,
    pub timestamp: String,
}

/// Request body for saving a draft snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    pub form_data: serde_json::Value,
    #[serde(default)]
    pub markdown_content: String,
}
