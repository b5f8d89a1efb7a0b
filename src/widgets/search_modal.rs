//! Search modal over three facets: posts, tags and series.
//!
//! Operates on lists supplied at construction; there is no incremental or
//! fuzzy matching, just a case-insensitive substring filter on post titles.

use crate::aggregate::{SeriesOverview, TagCount};

use super::matches;

/// One post candidate shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
}

/// The active facet tab. Switching is stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFacet {
    #[default]
    Posts,
    Tags,
    Series,
}

/// In-memory search modal state.
#[derive(Debug, Clone)]
pub struct SearchModal {
    posts: Vec<SearchItem>,
    tags: Vec<TagCount>,
    series: Vec<SeriesOverview>,
    query: String,
    facet: SearchFacet,
    open: bool,
}

impl SearchModal {
    pub fn new(posts: Vec<SearchItem>, tags: Vec<TagCount>, series: Vec<SeriesOverview>) -> Self {
        Self {
            posts,
            tags,
            series,
            query: String::new(),
            facet: SearchFacet::default(),
            open: false,
        }
    }

    /// Open the modal. The query does not persist across reopen.
    pub fn open(&mut self) {
        self.query.clear();
        self.facet = SearchFacet::default();
        self.open = true;
    }

    /// Escape or outside click.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_facet(&mut self, facet: SearchFacet) {
        self.facet = facet;
    }

    pub fn facet(&self) -> SearchFacet {
        self.facet
    }

    /// Posts whose title contains the query, case-insensitively. An empty
    /// query matches everything.
    pub fn post_results(&self) -> Vec<&SearchItem> {
        self.posts
            .iter()
            .filter(|p| matches(&p.title, &self.query))
            .collect()
    }

    /// The tag facet is a plain list; it is not filtered by the query.
    pub fn tag_results(&self) -> &[TagCount] {
        &self.tags
    }

    /// The series facet is a plain list; it is not filtered by the query.
    pub fn series_results(&self) -> &[SeriesOverview] {
        &self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> SearchModal {
        SearchModal::new(
            vec![
                SearchItem {
                    id: "1".to_string(),
                    title: "Writing an Axum backend".to_string(),
                },
                SearchItem {
                    id: "2".to_string(),
                    title: "CSS tricks".to_string(),
                },
            ],
            vec![TagCount {
                tag: "rust".to_string(),
                count: 3,
            }],
            vec![SeriesOverview {
                series: "axum-series".to_string(),
                count: 2,
                cover_image: "cover.png".to_string(),
            }],
        )
    }

    #[test]
    fn test_title_substring_filter_case_insensitive() {
        let mut m = modal();
        m.open();
        m.set_query("AXUM");

        let results = m.post_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_empty_query_matches_all_posts() {
        let mut m = modal();
        m.open();

        assert_eq!(m.post_results().len(), 2);
    }

    #[test]
    fn test_facet_lists_are_untouched_by_query() {
        let mut m = modal();
        m.open();
        m.set_query("zzz");

        assert_eq!(m.tag_results().len(), 1);
        assert_eq!(m.series_results().len(), 1);
        assert!(m.post_results().is_empty());
    }

    #[test]
    fn test_query_resets_on_reopen() {
        let mut m = modal();
        m.open();
        m.set_query("axum");
        m.close();
        assert!(!m.is_open());

        m.open();
        assert_eq!(m.query(), "");
        assert!(m.is_open());
    }

    #[test]
    fn test_facet_switching() {
        let mut m = modal();
        m.open();
        m.set_facet(SearchFacet::Series);
        assert_eq!(m.facet(), SearchFacet::Series);

        // Reopen resets to the default facet.
        m.close();
        m.open();
        assert_eq!(m.facet(), SearchFacet::Posts);
    }
}
