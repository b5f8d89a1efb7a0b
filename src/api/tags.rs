//! Tag aggregation API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::aggregate::{all_tags, TagCount};
use crate::query::PostQuery;
use crate::AppState;

/// GET /api/tags - Tags with their non-draft post counts, sorted
/// alphabetically. Count-sorting, when wanted, is done by the caller.
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Vec<TagCount>> {
    let posts = state.posts.list(&PostQuery::default()).await?;
    success(all_tags(&posts.items))
}
