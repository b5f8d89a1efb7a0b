//! Post model matching the site's content schema.

use serde::{Deserialize, Serialize};

/// A blog post entry.
///
/// Dates are RFC 3339 strings, so lexicographic order is chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    pub title: String,
    /// Flagged for featured placement.
    #[serde(default)]
    pub pinned: bool,
    /// Excluded from public listings by default.
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub og_image: String,
    /// Series id this post belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub description: String,
}
