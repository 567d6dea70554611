//! Search filtering over the path list.

use std::collections::BTreeSet;

use super::exclusion::ExclusionSet;
use crate::tree::path::ancestors;

/// Case-insensitive substring match against the full path.
/// An empty term matches everything.
pub fn matches_search(path: &str, term: &str) -> bool {
    term.is_empty() || path.to_lowercase().contains(&term.to_lowercase())
}

/// Compute the paths a tree view may show.
///
/// Excluded paths are always dropped. With an empty search term every
/// remaining path is visible. Otherwise only matching paths are kept, plus
/// every ancestor of a match (root included) so each match stays connected
/// to the root. Non-matching branches are pruned entirely.
pub fn compute_visible(
    all_paths: &[String],
    search_term: &str,
    exclusions: &ExclusionSet,
) -> BTreeSet<String> {
    let candidates = all_paths.iter().filter(|p| !exclusions.is_excluded(p));

    if search_term.is_empty() {
        return candidates.cloned().collect();
    }

    let term = search_term.to_lowercase();
    let mut visible = BTreeSet::new();
    for path in candidates {
        if !path.to_lowercase().contains(&term) {
            continue;
        }
        for ancestor in ancestors(path) {
            visible.insert(ancestor);
        }
        visible.insert(path.clone());
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<String> {
        paths(&[
            "/",
            "/docs",
            "/docs/Guide.md",
            "/docs/api",
            "/docs/api/index.html",
            "/src",
            "/src/main.rs",
            "/dist",
            "/dist/guide.js",
        ])
    }

    #[test]
    fn test_empty_term_shows_everything_not_excluded() {
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/dist");

        let visible = compute_visible(&sample(), "", &exclusions);
        assert_eq!(visible.len(), 7);
        assert!(!visible.contains("/dist"));
        assert!(!visible.contains("/dist/guide.js"));
    }

    #[test]
    fn test_search_adds_ancestors_and_prunes_others() {
        let visible = compute_visible(&sample(), "index", &ExclusionSet::new());

        let expected: BTreeSet<String> = ["/", "/docs", "/docs/api", "/docs/api/index.html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let visible = compute_visible(&sample(), "GUIDE", &ExclusionSet::new());
        assert!(visible.contains("/docs/Guide.md"));
        assert!(visible.contains("/dist/guide.js"));
        assert!(visible.contains("/"));
    }

    #[test]
    fn test_search_matches_full_path_not_just_name() {
        // "docs/api" only appears across a separator
        let visible = compute_visible(&sample(), "docs/api", &ExclusionSet::new());
        assert!(visible.contains("/docs/api"));
        assert!(visible.contains("/docs/api/index.html"));
        assert!(!visible.contains("/docs/Guide.md"));
    }

    #[test]
    fn test_search_skips_excluded_matches() {
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/dist");

        let visible = compute_visible(&sample(), "guide", &exclusions);
        assert!(visible.contains("/docs/Guide.md"));
        assert!(!visible.contains("/dist/guide.js"));
        assert!(!visible.contains("/dist"));
    }

    #[test]
    fn test_no_matches() {
        let visible = compute_visible(&sample(), "zzz", &ExclusionSet::new());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("/a/B.txt", ""));
        assert!(matches_search("/a/B.txt", "b.t"));
        assert!(!matches_search("/a/B.txt", "c"));
    }
}
