//! Search API endpoint.
//!
//! Server-side counterpart of the search modal: the same three facets over
//! the same substring filter, for clients that have not hydrated the
//! in-page lists.

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::aggregate::{all_series, all_tags, SeriesOverview, TagCount};
use crate::query::PostQuery;
use crate::widgets;
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string. Filters the post facet only.
    #[serde(default)]
    pub q: String,
}

/// One post facet hit.
#[derive(Debug, Serialize)]
pub struct PostHit {
    pub id: String,
    pub title: String,
}

/// Three-facet search result.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub posts: Vec<PostHit>,
    pub tags: Vec<TagCount>,
    pub series: Vec<SeriesOverview>,
}

/// GET /api/search - Search posts by title substring; tags and series ride
/// along as full facet lists.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchResponse> {
    let page = state.posts.list(&PostQuery::default()).await?;

    let posts = page
        .items
        .iter()
        .filter(|e| widgets::matches(&e.data.title, &params.q))
        .map(|e| PostHit {
            id: e.id.clone(),
            title: e.data.title.clone(),
        })
        .collect();

    success(SearchResponse {
        posts,
        tags: all_tags(&page.items),
        series: all_series(&page.items),
    })
}
