//! Autosave draft API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Draft, SaveDraftRequest};
use crate::AppState;

/// GET /api/drafts - List drafts. Stale entries are purged first.
pub async fn list_drafts(State(state): State<AppState>) -> ApiResult<Vec<Draft>> {
    let drafts = state.store.list_drafts().await?;
    success(drafts)
}

/// GET /api/drafts/:contentId - Get one draft.
pub async fn get_draft(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> ApiResult<Draft> {
    let draft = state
        .store
        .get_draft(&content_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Draft {} not found", content_id)))?;

    success(draft)
}

/// PUT /api/drafts/:contentId - Save a snapshot. Last write wins.
pub async fn save_draft(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
    Json(request): Json<SaveDraftRequest>,
) -> ApiResult<Draft> {
    let draft = state.store.save_draft(&content_id, &request).await?;
    success(draft)
}

/// DELETE /api/drafts/:contentId - Discard a draft.
pub async fn delete_draft(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> ApiResult<()> {
    state.store.delete_draft(&content_id).await?;
    success(())
}
