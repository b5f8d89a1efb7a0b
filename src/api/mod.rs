//! REST API module.
//!
//! Contains all API routes and handlers following the site's client contract.

mod drafts;
mod posts;
mod projects;
mod search;
mod series;
mod stacks;
mod tags;
mod timeline;

pub use drafts::*;
pub use posts::*;
pub use projects::*;
pub use search::*;
pub use series::*;
pub use stacks::*;
pub use tags::*;
pub use timeline::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::query::{Paging, SortOrder};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    pub status_code: u16,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            ok: true,
            status_code: StatusCode::OK.as_u16(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Build a paging window from optional query params. A lone `page` gets a
/// default window size; a lone `limit` starts at the first page.
pub(crate) fn paging_from_params(page: Option<usize>, limit: Option<usize>) -> Option<Paging> {
    const DEFAULT_LIMIT: usize = 10;

    match (page, limit) {
        (None, None) => None,
        (page, limit) => Some(Paging {
            page: page.unwrap_or(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }),
    }
}

/// Parse a sort order param, defaulting to ascending.
pub(crate) fn order_from_param(
    order: Option<&str>,
) -> Result<SortOrder, crate::errors::AppError> {
    match order {
        None => Ok(SortOrder::Asc),
        Some(s) => SortOrder::from_str(s).ok_or_else(|| {
            crate::errors::AppError::Validation(format!("Unknown sort order: {}", s))
        }),
    }
}

/// Split a comma-separated query param into trimmed, non-empty items.
pub(crate) fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
