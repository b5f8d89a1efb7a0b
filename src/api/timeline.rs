//! Activity and career API endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{order_from_param, paging_from_params, success, ApiResult};
use crate::content::Entry;
use crate::errors::AppError;
use crate::models::{Activity, Career};
use crate::query::{Paginated, TimelineQuery, TimelineSort, TimelineSortField};
use crate::AppState;

/// Query parameters shared by the timeline collections.
#[derive(Debug, Deserialize)]
pub struct TimelineListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

fn timeline_query(params: &TimelineListParams) -> Result<TimelineQuery, AppError> {
    let sort = match &params.sort {
        None => None,
        Some(field) => {
            let field = TimelineSortField::from_str(field)
                .ok_or_else(|| AppError::Validation(format!("Unknown sort field: {}", field)))?;
            Some(TimelineSort {
                field,
                order: order_from_param(params.order.as_deref())?,
            })
        }
    };

    Ok(TimelineQuery {
        paging: paging_from_params(params.page, params.limit),
        sort,
    })
}

/// GET /api/activities - List activities.
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<TimelineListParams>,
) -> ApiResult<Paginated<Entry<Activity>>> {
    let query = timeline_query(&params)?;
    let page = state.activities.list(&query).await?;
    success(page)
}

/// GET /api/careers - List careers.
pub async fn list_careers(
    State(state): State<AppState>,
    Query(params): Query<TimelineListParams>,
) -> ApiResult<Paginated<Entry<Career>>> {
    let query = timeline_query(&params)?;
    let page = state.careers.list(&query).await?;
    success(page)
}
