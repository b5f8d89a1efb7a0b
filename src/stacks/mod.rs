//! Static stack catalog and display ranking.
//!
//! The catalog is compiled in; projects reference entries by id. Ranking is
//! the same everywhere a stack list is shown: super-featured first, then
//! featured, then the fixed category order, then name.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::{Stack, StackType};

/// Stacks referenced by a project, grouped for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackBuckets {
    /// Flattened view across every category.
    pub all: Vec<Stack>,
    /// One bucket per category, in fixed category order. Empty buckets are
    /// kept here; [`categories`] enumerates the non-empty ones.
    pub by_type: Vec<(StackType, Vec<Stack>)>,
}

static CATALOG: Lazy<Vec<Stack>> = Lazy::new(|| {
    fn stack(
        id: i64,
        types: &[StackType],
        name: &str,
        description: &str,
        color: &str,
        featured: bool,
        super_featured: bool,
    ) -> Stack {
        Stack {
            id,
            stack_type: types.to_vec(),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            featured,
            super_featured,
        }
    }

    use StackType::*;

    vec![
        stack(1, &[Frontend], "TypeScript", "Primary language for UI work", "#3178c6", true, true),
        stack(2, &[Frontend], "React", "Component model for interactive islands", "#61dafb", true, false),
        stack(3, &[Frontend], "Astro", "Static site generator", "#ff5d01", true, false),
        stack(4, &[Frontend], "Tailwind CSS", "Utility-first styling", "#38bdf8", false, false),
        stack(5, &[Frontend], "Storybook", "Component workshop", "#ff4785", false, false),
        stack(6, &[Backend], "Rust", "Systems and service code", "#dea584", true, true),
        stack(7, &[Backend], "Axum", "HTTP services", "#9b59b6", true, false),
        stack(8, &[Backend], "Node.js", "Tooling and scripts", "#339933", false, false),
        stack(9, &[Backend], "SQLite", "Embedded persistence", "#003b57", true, false),
        stack(10, &[Backend], "PostgreSQL", "Relational persistence", "#336791", false, false),
        stack(11, &[DevOps], "Docker", "Container builds", "#2496ed", true, false),
        stack(12, &[DevOps], "GitHub Actions", "CI pipelines", "#2088ff", false, false),
        stack(13, &[DevOps], "AWS", "Hosting and object storage", "#ff9900", false, false),
        stack(14, &[Etc], "Figma", "Design handoff", "#f24e1e", false, false),
        stack(15, &[Etc], "Markdown", "Content authoring", "#083fa1", false, false),
        stack(16, &[Frontend, Backend], "GraphQL", "API schema layer", "#e10098", false, false),
    ]
});

/// The full compiled-in catalog.
pub fn catalog() -> &'static [Stack] {
    &CATALOG
}

/// Total display order within a bucket.
fn precedence(a: &Stack, b: &Stack) -> Ordering {
    b.super_featured
        .cmp(&a.super_featured)
        .then(b.featured.cmp(&a.featured))
        .then(category_rank(a).cmp(&category_rank(b)))
        .then(a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Rank of a stack's primary category; entries without one sort last.
fn category_rank(stack: &Stack) -> usize {
    stack
        .stack_type
        .first()
        .map(|t| t.rank())
        .unwrap_or(StackType::ALL.len())
}

/// Resolve referenced stack ids against the catalog and group the matches
/// by category, deduplicated by id and ranked within each bucket.
pub fn rank_stacks(ids: &[i64]) -> StackBuckets {
    let mut all: Vec<Stack> = Vec::new();

    for id in ids {
        if all.iter().any(|s| s.id == *id) {
            continue;
        }
        if let Some(stack) = CATALOG.iter().find(|s| s.id == *id) {
            all.push(stack.clone());
        }
    }

    all.sort_by(precedence);

    let by_type = StackType::ALL
        .iter()
        .map(|t| {
            let bucket: Vec<Stack> = all
                .iter()
                .filter(|s| s.stack_type.contains(t))
                .cloned()
                .collect();
            (*t, bucket)
        })
        .collect();

    StackBuckets { all, by_type }
}

/// Non-empty categories of a grouping, in fixed category order. Used to
/// build the filter tabs.
pub fn categories(buckets: &StackBuckets) -> Vec<StackType> {
    buckets
        .by_type
        .iter()
        .filter(|(_, stacks)| !stacks.is_empty())
        .map(|(t, _)| *t)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_featured_beats_category_order() {
        // Backend+featured vs Frontend+super_featured: super wins.
        let buckets = rank_stacks(&[7, 1]);

        assert_eq!(buckets.all[0].name, "TypeScript");
        assert_eq!(buckets.all[1].name, "Axum");
    }

    #[test]
    fn test_featured_beats_plain_within_category() {
        let buckets = rank_stacks(&[4, 2]);

        assert_eq!(buckets.all[0].name, "React");
        assert_eq!(buckets.all[1].name, "Tailwind CSS");
    }

    #[test]
    fn test_category_order_then_name() {
        // All unflagged: Tailwind (Frontend) before Node (Backend) before
        // GitHub Actions (DevOps) before Figma (ETC).
        let buckets = rank_stacks(&[14, 12, 8, 4]);

        let names: Vec<&str> = buckets.all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Tailwind CSS", "Node.js", "GitHub Actions", "Figma"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let buckets = rank_stacks(&[6, 6, 6]);

        assert_eq!(buckets.all.len(), 1);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let buckets = rank_stacks(&[999, 6]);

        assert_eq!(buckets.all.len(), 1);
        assert_eq!(buckets.all[0].name, "Rust");
    }

    #[test]
    fn test_multi_category_stack_lands_in_both_buckets() {
        let buckets = rank_stacks(&[16]);

        let frontend = &buckets.by_type[0].1;
        let backend = &buckets.by_type[1].1;
        assert_eq!(frontend.len(), 1);
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_categories_skips_empty_buckets() {
        let buckets = rank_stacks(&[2, 11]);

        assert_eq!(
            categories(&buckets),
            vec![StackType::Frontend, StackType::DevOps]
        );
    }
}
