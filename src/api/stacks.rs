//! Stack catalog API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::api::ProjectStacksResponse;
use crate::stacks::{catalog, categories, rank_stacks};
use crate::AppState;

/// GET /api/stacks - The full catalog, ranked and grouped.
pub async fn list_stacks(State(_state): State<AppState>) -> ApiResult<ProjectStacksResponse> {
    let ids: Vec<i64> = catalog().iter().map(|s| s.id).collect();
    let buckets = rank_stacks(&ids);
    let tabs = categories(&buckets);

    success(ProjectStacksResponse {
        buckets,
        categories: tabs,
    })
}
