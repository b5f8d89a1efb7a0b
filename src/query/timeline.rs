//! Activity and career repositories.
//!
//! Both share the date-sort semantics of projects: an empty end date means
//! ongoing and is pinned to the front of any end-date sort.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::content::{ContentSource, Entry};
use crate::errors::AppError;
use crate::models::{Activity, Career};

use super::{cmp_alpha, cmp_date, cmp_ended_at, paginate, Paginated, Paging, SortOrder};

/// Sortable fields shared by the timeline collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSortField {
    StartedAt,
    EndedAt,
}

impl TimelineSortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "startedAt" => Some(TimelineSortField::StartedAt),
            "endedAt" => Some(TimelineSortField::EndedAt),
            _ => None,
        }
    }
}

/// Sort request for the timeline collections.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSort {
    pub field: TimelineSortField,
    pub order: SortOrder,
}

/// Query options for listing activities or careers.
#[derive(Debug, Clone, Default)]
pub struct TimelineQuery {
    pub paging: Option<Paging>,
    pub sort: Option<TimelineSort>,
}

/// Read-only repository over the activity collection.
#[derive(Clone)]
pub struct ActivityRepository {
    source: Arc<dyn ContentSource>,
}

impl ActivityRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self, query: &TimelineQuery) -> Result<Paginated<Entry<Activity>>, AppError> {
        let mut activities = self.source.activities().await?;
        let total = activities.len();

        if let Some(sort) = query.sort {
            activities.sort_by(|a, b| {
                let primary = match sort.field {
                    TimelineSortField::StartedAt => {
                        cmp_date(&a.data.started_at, &b.data.started_at, sort.order)
                    }
                    TimelineSortField::EndedAt => {
                        cmp_ended_at(&a.data.ended_at, &b.data.ended_at, sort.order)
                    }
                };
                match primary {
                    Ordering::Equal => cmp_alpha(&a.data.title, &b.data.title),
                    other => other,
                }
            });
        }

        Ok(paginate(activities, total, query.paging.as_ref()))
    }

    /// Look up an activity by its unique id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Entry<Activity>>, AppError> {
        let activities = self.source.activities().await?;
        Ok(activities.into_iter().find(|e| e.id == id))
    }
}

/// Read-only repository over the career collection.
#[derive(Clone)]
pub struct CareerRepository {
    source: Arc<dyn ContentSource>,
}

impl CareerRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self, query: &TimelineQuery) -> Result<Paginated<Entry<Career>>, AppError> {
        let mut careers = self.source.careers().await?;
        let total = careers.len();

        if let Some(sort) = query.sort {
            careers.sort_by(|a, b| {
                let primary = match sort.field {
                    TimelineSortField::StartedAt => {
                        cmp_date(&a.data.started_at, &b.data.started_at, sort.order)
                    }
                    TimelineSortField::EndedAt => {
                        cmp_ended_at(&a.data.ended_at, &b.data.ended_at, sort.order)
                    }
                };
                match primary {
                    Ordering::Equal => {
                        cmp_alpha(&a.data.organization_name, &b.data.organization_name)
                    }
                    other => other,
                }
            });
        }

        Ok(paginate(careers, total, query.paging.as_ref()))
    }

    /// Look up a career entry by its unique id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Entry<Career>>, AppError> {
        let careers = self.source.careers().await?;
        Ok(careers.into_iter().find(|e| e.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testutil::StaticSource;

    fn career(org: &str, started_at: &str, ended_at: &str) -> Entry<Career> {
        Entry {
            id: org.to_lowercase().replace(' ', "-"),
            data: Career {
                organization_name: org.to_string(),
                role: "Engineer".to_string(),
                description: String::new(),
                started_at: started_at.to_string(),
                ended_at: ended_at.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_current_position_sorts_first() {
        let past = career("Oldcorp", "2018-03", "2021-06");
        let current = career("Newcorp", "2021-07", "");

        let repo = CareerRepository::new(Arc::new(StaticSource {
            careers: vec![past, current],
            ..Default::default()
        }));

        let query = TimelineQuery {
            sort: Some(TimelineSort {
                field: TimelineSortField::EndedAt,
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items[0].data.organization_name, "Newcorp");
    }

    #[tokio::test]
    async fn test_career_tie_break_on_organization() {
        let b = career("Beta Labs", "2020-01", "2022-01");
        let a = career("acme", "2019-01", "2022-01");

        let repo = CareerRepository::new(Arc::new(StaticSource {
            careers: vec![b, a],
            ..Default::default()
        }));

        let query = TimelineQuery {
            sort: Some(TimelineSort {
                field: TimelineSortField::EndedAt,
                order: SortOrder::Asc,
            }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items[0].data.organization_name, "acme");
    }

    #[tokio::test]
    async fn test_activity_sort_started_at_desc() {
        let older = Entry {
            id: "talk".to_string(),
            data: Activity {
                title: "Conference talk".to_string(),
                description: String::new(),
                url: String::new(),
                started_at: "2022-05".to_string(),
                ended_at: "2022-05".to_string(),
            },
        };
        let newer = Entry {
            id: "oss".to_string(),
            data: Activity {
                title: "OSS contribution".to_string(),
                description: String::new(),
                url: String::new(),
                started_at: "2024-02".to_string(),
                ended_at: String::new(),
            },
        };

        let repo = ActivityRepository::new(Arc::new(StaticSource {
            activities: vec![older, newer],
            ..Default::default()
        }));

        let query = TimelineQuery {
            sort: Some(TimelineSort {
                field: TimelineSortField::StartedAt,
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items[0].data.title, "OSS contribution");
    }

    #[tokio::test]
    async fn test_career_get_by_id() {
        let repo = CareerRepository::new(Arc::new(StaticSource {
            careers: vec![career("Acme", "2019-01", "2022-01")],
            ..Default::default()
        }));

        assert!(repo.get_by_id("acme").await.unwrap().is_some());
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_activity_get_by_id() {
        let repo = ActivityRepository::new(Arc::new(StaticSource {
            activities: vec![Entry {
                id: "talk".to_string(),
                data: Activity {
                    title: "Conference talk".to_string(),
                    description: String::new(),
                    url: String::new(),
                    started_at: "2022-05".to_string(),
                    ended_at: "2022-05".to_string(),
                },
            }],
            ..Default::default()
        }));

        assert!(repo.get_by_id("talk").await.unwrap().is_some());
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }
}
