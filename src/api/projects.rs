//! Project API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{order_from_param, paging_from_params, split_csv, success, ApiResult};
use crate::content::Entry;
use crate::errors::AppError;
use crate::models::{CreateProjectRequest, Project, ProjectType, Role};
use crate::query::{Paginated, ProjectFilter, ProjectQuery, ProjectSort, ProjectSortField};
use crate::stacks::{categories, rank_stacks, StackBuckets};
use crate::AppState;

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub project_type: Option<String>,
    /// Comma-separated; a project must carry every listed role.
    pub roles: Option<String>,
    /// Comma-separated; a project must reference every listed stack id.
    pub stack_ids: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /api/projects - List projects with filter/sort/paging.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> ApiResult<Paginated<Entry<Project>>> {
    let project_type = match &params.project_type {
        None => None,
        Some(s) => Some(
            ProjectType::from_str(s)
                .ok_or_else(|| AppError::Validation(format!("Unknown project type: {}", s)))?,
        ),
    };

    let roles = match &params.roles {
        None => None,
        Some(s) => {
            let mut roles = Vec::new();
            for item in split_csv(s) {
                let role = Role::from_str(&item)
                    .ok_or_else(|| AppError::Validation(format!("Unknown role: {}", item)))?;
                roles.push(role);
            }
            Some(roles)
        }
    };

    let stack_ids = match &params.stack_ids {
        None => None,
        Some(s) => {
            let mut ids = Vec::new();
            for item in split_csv(s) {
                let id: i64 = item
                    .parse()
                    .map_err(|_| AppError::Validation(format!("Invalid stack id: {}", item)))?;
                ids.push(id);
            }
            Some(ids)
        }
    };

    let sort = match &params.sort {
        None => None,
        Some(field) => {
            let field = ProjectSortField::from_str(field)
                .ok_or_else(|| AppError::Validation(format!("Unknown sort field: {}", field)))?;
            Some(ProjectSort {
                field,
                order: order_from_param(params.order.as_deref())?,
            })
        }
    };

    let query = ProjectQuery {
        paging: paging_from_params(params.page, params.limit),
        filter: ProjectFilter {
            project_type,
            roles,
            stack_ids,
        },
        sort,
    };

    let page = state.projects.list(&query).await?;
    success(page)
}

/// GET /api/projects/:name - Get a project by name.
pub async fn get_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Entry<Project>> {
    let project = state
        .projects
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", name)))?;

    success(project)
}

/// Ranked stacks of one project, plus its non-empty category tabs.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStacksResponse {
    pub buckets: StackBuckets,
    pub categories: Vec<crate::models::StackType>,
}

/// GET /api/projects/:name/stacks - Ranked stack buckets for a project.
pub async fn get_project_stacks(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ProjectStacksResponse> {
    let project = state
        .projects
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", name)))?;

    let buckets = rank_stacks(&project.data.stack_ids);
    let tabs = categories(&buckets);

    success(ProjectStacksResponse {
        buckets,
        categories: tabs,
    })
}

/// PUT /api/projects - Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<Entry<Project>> {
    if request.project_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Project name is required".to_string(),
        ));
    }
    if request.started_at.trim().is_empty() {
        return Err(AppError::Validation(
            "Project start date is required".to_string(),
        ));
    }

    let created = state.store.create_project(&request).await?;
    success(created)
}
