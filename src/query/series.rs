//! Series repository.

use std::sync::Arc;

use crate::content::{ContentSource, Entry};
use crate::errors::AppError;
use crate::models::Series;

use super::{cmp_alpha, paginate, Paginated, Paging};

/// Query options for listing series. The collection is small; only paging
/// is configurable and the order is always name ascending.
#[derive(Debug, Clone, Default)]
pub struct SeriesQuery {
    pub paging: Option<Paging>,
}

/// Read-only repository over the series collection.
#[derive(Clone)]
pub struct SeriesRepository {
    source: Arc<dyn ContentSource>,
}

impl SeriesRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// List series sorted by name.
    pub async fn list(&self, query: &SeriesQuery) -> Result<Paginated<Entry<Series>>, AppError> {
        let mut series = self.source.series().await?;

        let total = series.len();
        series.sort_by(|a, b| cmp_alpha(&a.data.name, &b.data.name));

        Ok(paginate(series, total, query.paging.as_ref()))
    }

    /// Look up a series by its unique id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Entry<Series>>, AppError> {
        let series = self.source.series().await?;
        Ok(series.into_iter().find(|e| e.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testutil::StaticSource;

    fn series(id: &str, name: &str) -> Entry<Series> {
        Entry {
            id: id.to_string(),
            data: Series {
                name: name.to_string(),
                og_image: String::new(),
            },
        }
    }

    fn repo(series: Vec<Entry<Series>>) -> SeriesRepository {
        SeriesRepository::new(Arc::new(StaticSource {
            series,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let repo = repo(vec![series("2", "zola"), series("1", "Axum")]);

        let page = repo.list(&SeriesQuery::default()).await.unwrap();
        assert_eq!(page.items[0].data.name, "Axum");
        assert_eq!(page.items[1].data.name, "zola");
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = repo(vec![series("abc", "Axum")]);

        assert!(repo.get_by_id("abc").await.unwrap().is_some());
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }
}
