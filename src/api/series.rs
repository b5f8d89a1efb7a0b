//! Series API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{paging_from_params, success, ApiResult};
use crate::aggregate::{all_series, SeriesOverview};
use crate::content::Entry;
use crate::errors::AppError;
use crate::models::{SaveAllSeriesRequest, Series};
use crate::query::{Paginated, PostQuery, SeriesQuery};
use crate::AppState;

/// Query parameters for listing series.
#[derive(Debug, Deserialize)]
pub struct SeriesListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// GET /api/series - List the series collection.
pub async fn list_series(
    State(state): State<AppState>,
    Query(params): Query<SeriesListParams>,
) -> ApiResult<Paginated<Entry<Series>>> {
    let query = SeriesQuery {
        paging: paging_from_params(params.page, params.limit),
    };

    let page = state.series.list(&query).await?;
    success(page)
}

/// GET /api/series/overview - Series derived from the post set, with post
/// counts and first-seen cover images.
pub async fn series_overview(State(state): State<AppState>) -> ApiResult<Vec<SeriesOverview>> {
    let posts = state.posts.list(&PostQuery::default()).await?;
    success(all_series(&posts.items))
}

/// GET /api/series/:id - Get a series by id.
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Entry<Series>> {
    let series = state
        .series
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Series {} not found", id)))?;

    success(series)
}

/// PUT /api/series - Replace the full series list.
pub async fn save_all_series(
    State(state): State<AppState>,
    Json(request): Json<SaveAllSeriesRequest>,
) -> ApiResult<()> {
    for s in &request.series {
        if s.id.trim().is_empty() || s.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Series id and name are required".to_string(),
            ));
        }
    }

    state.store.save_all_series(&request.series).await?;
    success(())
}
