//! Project repository and its query options.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::content::{ContentSource, Entry};
use crate::errors::AppError;
use crate::models::{Project, ProjectType, Role};

use super::{cmp_alpha, cmp_date, cmp_ended_at, contains_all, paginate, Paginated, Paging, SortOrder};

/// Sortable fields of the project collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortField {
    StartedAt,
    EndedAt,
}

impl ProjectSortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "startedAt" => Some(ProjectSortField::StartedAt),
            "endedAt" => Some(ProjectSortField::EndedAt),
            _ => None,
        }
    }
}

/// Sort request for projects.
#[derive(Debug, Clone, Copy)]
pub struct ProjectSort {
    pub field: ProjectSortField,
    pub order: SortOrder,
}

/// Filter predicates for projects. Every present predicate must hold (AND).
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub project_type: Option<ProjectType>,
    /// Record must carry every listed role.
    pub roles: Option<Vec<Role>>,
    /// Record must reference every listed stack id.
    pub stack_ids: Option<Vec<i64>>,
}

/// Query options for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub paging: Option<Paging>,
    pub filter: ProjectFilter,
    pub sort: Option<ProjectSort>,
}

/// Read-only repository over the project collection.
#[derive(Clone)]
pub struct ProjectRepository {
    source: Arc<dyn ContentSource>,
}

impl ProjectRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// List projects: filter, count, sort, paginate.
    ///
    /// Sorting by `endedAt` pins ongoing projects (empty end date) to the
    /// front regardless of the requested direction.
    pub async fn list(&self, query: &ProjectQuery) -> Result<Paginated<Entry<Project>>, AppError> {
        let mut projects = self.source.projects().await?;
        let filter = &query.filter;

        projects.retain(|entry| {
            let p = &entry.data;

            if let Some(project_type) = filter.project_type {
                if p.project_type != project_type {
                    return false;
                }
            }
            if let Some(roles) = &filter.roles {
                if !contains_all(&p.roles, roles) {
                    return false;
                }
            }
            if let Some(stack_ids) = &filter.stack_ids {
                if !contains_all(&p.stack_ids, stack_ids) {
                    return false;
                }
            }
            true
        });

        let total = projects.len();

        if let Some(sort) = query.sort {
            projects.sort_by(|a, b| {
                let primary = match sort.field {
                    ProjectSortField::StartedAt => {
                        cmp_date(&a.data.started_at, &b.data.started_at, sort.order)
                    }
                    ProjectSortField::EndedAt => {
                        cmp_ended_at(&a.data.ended_at, &b.data.ended_at, sort.order)
                    }
                };
                match primary {
                    Ordering::Equal => cmp_alpha(&a.data.project_name, &b.data.project_name),
                    other => other,
                }
            });
        }

        Ok(paginate(projects, total, query.paging.as_ref()))
    }

    /// Look up a project by its name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Entry<Project>>, AppError> {
        let projects = self.source.projects().await?;
        Ok(projects.into_iter().find(|e| e.data.project_name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testutil::StaticSource;

    fn project(name: &str, started_at: &str, ended_at: &str) -> Entry<Project> {
        Entry {
            id: name.to_lowercase().replace(' ', "-"),
            data: Project {
                project_type: ProjectType::SideProject,
                image_url: String::new(),
                site_url: String::new(),
                roles: Vec::new(),
                company_name: String::new(),
                project_name: name.to_string(),
                short_description: String::new(),
                started_at: started_at.to_string(),
                ended_at: ended_at.to_string(),
                stack_ids: Vec::new(),
            },
        }
    }

    fn repo(projects: Vec<Entry<Project>>) -> ProjectRepository {
        ProjectRepository::new(Arc::new(StaticSource {
            projects,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_ongoing_sorts_first_even_desc() {
        let finished = project("Finished", "2020-01", "2023-12");
        let ongoing = project("Ongoing", "2021-01", "");

        let repo = repo(vec![finished, ongoing]);
        let query = ProjectQuery {
            sort: Some(ProjectSort {
                field: ProjectSortField::EndedAt,
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        // Desc would put the larger string first, but ongoing is pinned.
        assert_eq!(page.items[0].data.project_name, "Ongoing");
        assert_eq!(page.items[1].data.project_name, "Finished");
    }

    #[tokio::test]
    async fn test_two_ongoing_tie_break_on_name() {
        let b = project("Beta", "2021-01", "");
        let a = project("alpha", "2022-01", "");

        let repo = repo(vec![b, a]);
        let query = ProjectQuery {
            sort: Some(ProjectSort {
                field: ProjectSortField::EndedAt,
                order: SortOrder::Asc,
            }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items[0].data.project_name, "alpha");
        assert_eq!(page.items[1].data.project_name, "Beta");
    }

    #[tokio::test]
    async fn test_role_filter_requires_superset() {
        let mut full = project("Full", "2020-01", "");
        full.data.roles = vec![Role::Frontend, Role::Backend];
        let mut front = project("Front", "2020-01", "");
        front.data.roles = vec![Role::Frontend];

        let repo = repo(vec![full, front]);
        let query = ProjectQuery {
            filter: ProjectFilter {
                roles: Some(vec![Role::Frontend, Role::Backend]),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.project_name, "Full");
    }

    #[tokio::test]
    async fn test_stack_id_filter_requires_superset() {
        let mut both = project("Both", "2020-01", "");
        both.data.stack_ids = vec![1, 2, 3];
        let mut partial = project("Partial", "2020-01", "");
        partial.data.stack_ids = vec![1];

        let repo = repo(vec![both, partial]);
        let query = ProjectQuery {
            filter: ProjectFilter {
                stack_ids: Some(vec![1, 2]),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.project_name, "Both");
    }

    #[tokio::test]
    async fn test_project_type_filter() {
        let mut company = project("Work", "2020-01", "");
        company.data.project_type = ProjectType::CompanyProject;
        let side = project("Side", "2020-01", "");

        let repo = repo(vec![company, side]);
        let query = ProjectQuery {
            filter: ProjectFilter {
                project_type: Some(ProjectType::CompanyProject),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.project_name, "Work");
    }

    #[tokio::test]
    async fn test_no_sort_preserves_source_order() {
        let z = project("Zed", "2024-01", "");
        let a = project("Ack", "2020-01", "");

        let repo = repo(vec![z.clone(), a]);
        let page = repo.list(&ProjectQuery::default()).await.unwrap();

        assert_eq!(page.items[0].data.project_name, "Zed");
    }
}
