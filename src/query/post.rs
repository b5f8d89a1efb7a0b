//! Post repository and its query options.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::content::{ContentSource, Entry};
use crate::errors::AppError;
use crate::models::Post;

use super::{cmp_alpha, cmp_date, contains_all, paginate, Paginated, Paging, SortOrder};

/// Sortable fields of the post collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    CreatedAt,
    UpdatedAt,
    Title,
}

impl PostSortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "createdAt" => Some(PostSortField::CreatedAt),
            "updatedAt" => Some(PostSortField::UpdatedAt),
            "title" => Some(PostSortField::Title),
            _ => None,
        }
    }
}

/// Sort request for posts.
#[derive(Debug, Clone, Copy)]
pub struct PostSort {
    pub field: PostSortField,
    pub order: SortOrder,
}

/// Filter predicates for posts. Every present predicate must hold (AND).
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Record must carry every listed tag.
    pub tags: Option<Vec<String>>,
    pub series: Option<String>,
    pub pinned: Option<bool>,
    /// Unspecified means "only non-draft records".
    pub draft: Option<bool>,
}

/// Query options for listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub paging: Option<Paging>,
    pub filter: PostFilter,
    pub sort: Option<PostSort>,
}

/// Read-only repository over the post collection.
#[derive(Clone)]
pub struct PostRepository {
    source: Arc<dyn ContentSource>,
}

impl PostRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// List posts: filter, count, sort, paginate.
    ///
    /// Defaults to `createdAt` descending when no sort is given.
    pub async fn list(&self, query: &PostQuery) -> Result<Paginated<Entry<Post>>, AppError> {
        let mut posts = self.source.posts().await?;
        let filter = &query.filter;

        posts.retain(|entry| {
            let p = &entry.data;

            // Implicit draft policy: public listings exclude drafts.
            if p.draft != filter.draft.unwrap_or(false) {
                return false;
            }
            if let Some(pinned) = filter.pinned {
                if p.pinned != pinned {
                    return false;
                }
            }
            if let Some(series) = &filter.series {
                if p.series.as_deref() != Some(series.as_str()) {
                    return false;
                }
            }
            if let Some(tags) = &filter.tags {
                if !contains_all(&p.tags, tags) {
                    return false;
                }
            }
            true
        });

        let total = posts.len();

        let sort = query.sort.unwrap_or(PostSort {
            field: PostSortField::CreatedAt,
            order: SortOrder::Desc,
        });

        posts.sort_by(|a, b| {
            let primary = match sort.field {
                PostSortField::CreatedAt => {
                    cmp_date(&a.data.created_at, &b.data.created_at, sort.order)
                }
                PostSortField::UpdatedAt => {
                    cmp_date(&a.data.updated_at, &b.data.updated_at, sort.order)
                }
                PostSortField::Title => match sort.order {
                    SortOrder::Asc => cmp_alpha(&a.data.title, &b.data.title),
                    SortOrder::Desc => cmp_alpha(&b.data.title, &a.data.title),
                },
            };
            match primary {
                Ordering::Equal => cmp_alpha(&a.data.title, &b.data.title),
                other => other,
            }
        });

        Ok(paginate(posts, total, query.paging.as_ref()))
    }

    /// Look up a post by its title. Drafts are found too; the caller decides
    /// whether a draft may be shown.
    pub async fn get_by_title(&self, title: &str) -> Result<Option<Entry<Post>>, AppError> {
        let posts = self.source.posts().await?;
        Ok(posts.into_iter().find(|e| e.data.title == title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testutil::{post, StaticSource};

    fn repo(posts: Vec<Entry<Post>>) -> PostRepository {
        PostRepository::new(Arc::new(StaticSource {
            posts,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_draft_excluded_by_default() {
        let mut draft = post("Hidden", "2024-01-01T00:00:00Z");
        draft.data.draft = true;
        let published = post("Visible", "2024-01-02T00:00:00Z");

        let repo = repo(vec![draft, published]);
        let page = repo.list(&PostQuery::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.title, "Visible");
    }

    #[tokio::test]
    async fn test_draft_filter_explicit() {
        let mut draft = post("Hidden", "2024-01-01T00:00:00Z");
        draft.data.draft = true;
        let published = post("Visible", "2024-01-02T00:00:00Z");

        let repo = repo(vec![draft, published]);
        let query = PostQuery {
            filter: PostFilter {
                draft: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.title, "Hidden");
    }

    #[tokio::test]
    async fn test_tag_filter_requires_superset() {
        let mut both = post("Both", "2024-01-01T00:00:00Z");
        both.data.tags = vec!["rust".to_string(), "web".to_string()];
        let mut partial = post("Partial", "2024-01-02T00:00:00Z");
        partial.data.tags = vec!["rust".to_string()];

        let repo = repo(vec![both, partial]);
        let query = PostQuery {
            filter: PostFilter {
                tags: Some(vec!["rust".to_string(), "web".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        // Partial overlap must be excluded.
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].data.title, "Both");
    }

    #[tokio::test]
    async fn test_default_sort_created_at_desc() {
        let older = post("Older", "2024-01-01T00:00:00Z");
        let newer = post("Newer", "2024-06-01T00:00:00Z");

        let repo = repo(vec![older, newer]);
        let page = repo.list(&PostQuery::default()).await.unwrap();

        assert_eq!(page.items[0].data.title, "Newer");
        assert_eq!(page.items[1].data.title, "Older");
    }

    #[tokio::test]
    async fn test_tie_falls_back_to_title() {
        let b = post("Banana", "2024-01-01T00:00:00Z");
        let a = post("apple", "2024-01-01T00:00:00Z");

        let repo = repo(vec![b, a]);
        let page = repo.list(&PostQuery::default()).await.unwrap();

        // Equal created_at: case-insensitive alphabetical on title.
        assert_eq!(page.items[0].data.title, "apple");
        assert_eq!(page.items[1].data.title, "Banana");
    }

    #[tokio::test]
    async fn test_total_is_pre_paging_count() {
        let posts: Vec<_> = (1..=5)
            .map(|i| post(&format!("Post {}", i), &format!("2024-01-0{}T00:00:00Z", i)))
            .collect();

        let repo = repo(posts);
        let query = PostQuery {
            paging: Some(Paging { page: 1, limit: 2 }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 2);
    }

    #[tokio::test]
    async fn test_pagination_is_one_indexed() {
        let posts: Vec<_> = (1..=5)
            .map(|i| post(&format!("Post {}", i), &format!("2024-01-0{}T00:00:00Z", i)))
            .collect();

        let repo = repo(posts);
        let query = PostQuery {
            paging: Some(Paging { page: 2, limit: 2 }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        // Default order is created_at desc: 5,4 | 3,2 | 1
        assert_eq!(page.items[0].data.title, "Post 3");
        assert_eq!(page.items[1].data.title, "Post 2");
    }

    #[tokio::test]
    async fn test_no_paging_returns_everything() {
        let posts: Vec<_> = (1..=3)
            .map(|i| post(&format!("Post {}", i), &format!("2024-01-0{}T00:00:00Z", i)))
            .collect();

        let repo = repo(posts);
        let page = repo.list(&PostQuery::default()).await.unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 3);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = repo(vec![post("Only", "2024-01-01T00:00:00Z")]);
        let query = PostQuery {
            paging: Some(Paging { page: 4, limit: 10 }),
            ..Default::default()
        };
        let page = repo.list(&query).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_get_by_title() {
        let repo = repo(vec![post("Exact Title", "2024-01-01T00:00:00Z")]);

        let found = repo.get_by_title("Exact Title").await.unwrap();
        assert!(found.is_some());

        let missing = repo.get_by_title("exact title").await.unwrap();
        assert!(missing.is_none());
    }
}
