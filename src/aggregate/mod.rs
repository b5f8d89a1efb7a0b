//! Aggregation utilities derived from the full post set.
//!
//! These feed the tag cloud, the series index and the search modal facets.
//! Zero-count entries never appear in either result.

use serde::Serialize;

use crate::content::Entry;
use crate::models::Post;

/// One tag with the number of non-draft posts carrying it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// One series with its post count and representative cover image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOverview {
    pub series: String,
    pub count: usize,
    pub cover_image: String,
}

/// Build the tag → count mapping from all non-draft posts, sorted
/// alphabetically by tag. Count-sorting, when needed, is the caller's job.
pub fn all_tags(posts: &[Entry<Post>]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();

    for entry in posts {
        if entry.data.draft {
            continue;
        }
        for tag in &entry.data.tags {
            match counts.iter_mut().find(|c| &c.tag == tag) {
                Some(c) => c.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| a.tag.cmp(&b.tag));
    counts
}

/// Group posts by series in `created_at` ascending order.
///
/// The first-seen post's og image becomes the series cover and is never
/// overwritten by later posts. Posts without a series are skipped.
pub fn all_series(posts: &[Entry<Post>]) -> Vec<SeriesOverview> {
    let mut ordered: Vec<&Entry<Post>> = posts.iter().filter(|e| !e.data.draft).collect();
    ordered.sort_by(|a, b| a.data.created_at.cmp(&b.data.created_at));

    let mut overviews: Vec<SeriesOverview> = Vec::new();

    for entry in ordered {
        let Some(series) = &entry.data.series else {
            continue;
        };
        match overviews.iter_mut().find(|o| &o.series == series) {
            Some(o) => o.count += 1,
            None => overviews.push(SeriesOverview {
                series: series.clone(),
                count: 1,
                cover_image: entry.data.og_image.clone(),
            }),
        }
    }

    overviews
}
