//! Post API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{order_from_param, paging_from_params, split_csv, success, ApiResult};
use crate::content::Entry;
use crate::errors::AppError;
use crate::models::{CreatePostRequest, Post};
use crate::query::{Paginated, PostFilter, PostQuery, PostSort, PostSortField};
use crate::AppState;

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Comma-separated; a post must carry every listed tag.
    pub tags: Option<String>,
    pub series: Option<String>,
    pub pinned: Option<bool>,
    pub draft: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /api/posts - List posts with filter/sort/paging.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> ApiResult<Paginated<Entry<Post>>> {
    let sort = match &params.sort {
        None => None,
        Some(field) => {
            let field = PostSortField::from_str(field)
                .ok_or_else(|| AppError::Validation(format!("Unknown sort field: {}", field)))?;
            Some(PostSort {
                field,
                order: order_from_param(params.order.as_deref())?,
            })
        }
    };

    let query = PostQuery {
        paging: paging_from_params(params.page, params.limit),
        filter: PostFilter {
            tags: params.tags.as_deref().map(split_csv),
            series: params.series.clone(),
            pinned: params.pinned,
            draft: params.draft,
        },
        sort,
    };

    let page = state.posts.list(&query).await?;
    success(page)
}

/// GET /api/posts/:title - Get a post by title.
pub async fn get_post(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Entry<Post>> {
    let post = state
        .posts
        .get_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", title)))?;

    success(post)
}

/// PUT /api/posts - Create a new post.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<Entry<Post>> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Post title is required".to_string()));
    }
    if request.author.trim().is_empty() {
        return Err(AppError::Validation("Post author is required".to_string()));
    }

    let created = state.store.create_post(&request).await?;
    success(created)
}
