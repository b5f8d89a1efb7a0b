//! Repository layer over the content source.
//!
//! Every repository follows the same pipeline: fetch the full collection,
//! apply the filter predicates as a conjunctive chain, capture the total
//! before paging, sort, then slice. Absent options are "no constraint" and
//! never an error.

mod post;
mod project;
mod series;
mod timeline;

pub use post::*;
pub use project::*;
pub use series::*;
pub use timeline::*;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Requested page window. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Paging {
    pub page: usize,
    pub limit: usize,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Page of results. `total` is the post-filter, pre-paging count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// True if `haystack` contains every element of `needles`.
///
/// Array-membership filters use superset (AND) semantics: a record with a
/// partial overlap is excluded.
pub(crate) fn contains_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|n| haystack.contains(n))
}

/// Slice the filtered, sorted items into the requested page.
///
/// No paging means "return everything, report it as one page".
pub(crate) fn paginate<T>(items: Vec<T>, total: usize, paging: Option<&Paging>) -> Paginated<T> {
    match paging {
        Some(p) => {
            let page = p.page.max(1);
            let start = (page - 1).saturating_mul(p.limit);
            Paginated {
                items: items.into_iter().skip(start).take(p.limit).collect(),
                total,
                page,
                limit: p.limit,
            }
        }
        None => Paginated {
            items,
            total,
            page: 1,
            limit: total,
        },
    }
}

/// Directional compare for RFC 3339 date strings.
pub(crate) fn cmp_date(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    }
}

/// Directional compare for end dates where the empty string means ongoing.
///
/// Ongoing entries sort to the front regardless of the requested direction.
pub(crate) fn cmp_ended_at(a: &str, b: &str, order: SortOrder) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => cmp_date(a, b, order),
    }
}

/// Case-insensitive alphabetical compare used as the secondary tiebreak.
pub(crate) fn cmp_alpha(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
