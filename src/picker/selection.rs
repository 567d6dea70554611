//! Selection state and the recursive toggle rule.

use std::collections::BTreeSet;

use super::exclusion::ExclusionSet;
use crate::tree::path::is_within;
use crate::tree::{FileTree, NodeId};

/// Display status of a single path. Exclusion overrides selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Unselected,
    Selected,
    Excluded,
}

/// The set of paths the user has chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set membership of `path` and every descendant reachable through the tree.
    ///
    /// Selecting skips effectively excluded descendants together with their
    /// whole subtree. Deselecting always clears every descendant.
    ///
    /// Returns false when nothing was applied: selecting an excluded path or
    /// a path missing from the tree. Deselecting a missing path only drops
    /// stale entries at or beneath it, and returns whether any were dropped.
    pub fn toggle(
        &mut self,
        tree: &FileTree,
        path: &str,
        select: bool,
        exclusions: &ExclusionSet,
    ) -> bool {
        if select && exclusions.is_excluded(path) {
            return false;
        }
        let Some(id) = tree.resolve(path) else {
            return !select && self.remove_within(path) > 0;
        };

        // Store the tree's spelling of the path, not the caller's.
        let Some(node) = tree.get_node(id) else {
            return false;
        };
        self.set(&node.path, select);
        self.apply_to_children(tree, id, select, exclusions);
        true
    }

    fn apply_to_children(
        &mut self,
        tree: &FileTree,
        id: NodeId,
        select: bool,
        exclusions: &ExclusionSet,
    ) {
        for child_id in tree.get_children(id) {
            let Some(child) = tree.get_node(child_id) else {
                continue;
            };
            if select && exclusions.is_excluded(&child.path) {
                continue;
            }
            self.set(&child.path, select);
            self.apply_to_children(tree, child_id, select, exclusions);
        }
    }

    fn set(&mut self, path: &str, select: bool) {
        if select {
            self.paths.insert(path.to_string());
        } else {
            self.paths.remove(path);
        }
    }

    /// Replace the selection with every non-excluded path.
    pub fn select_all(&mut self, all_paths: &[String], exclusions: &ExclusionSet) {
        self.paths = all_paths
            .iter()
            .filter(|p| !exclusions.is_excluded(p))
            .cloned()
            .collect();
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Drop every selected path equal to or beneath `path`.
    /// Returns how many were removed.
    pub fn remove_within(&mut self, path: &str) -> usize {
        let before = self.paths.len();
        self.paths.retain(|selected| !is_within(selected, path));
        before - self.paths.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Sorted copy of the selection.
    pub fn to_vec(&self) -> Vec<String> {
        self.paths.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    fn tree() -> FileTree {
        FileTree::from_root(Node::directory(
            "root",
            vec![
                Node::directory(
                    "src",
                    vec![
                        Node::file("lib.rs", Some(10)),
                        Node::directory("gen", vec![Node::file("out.rs", Some(5))]),
                    ],
                ),
                Node::directory("dist", vec![Node::file("app.js", Some(7))]),
                Node::file("README.md", Some(3)),
            ],
        ))
    }

    fn selected(set: &SelectionSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_select_recurses_into_descendants() {
        let tree = tree();
        let mut set = SelectionSet::new();

        assert!(set.toggle(&tree, "/src", true, &ExclusionSet::new()));
        assert_eq!(
            selected(&set),
            vec!["/src", "/src/gen", "/src/gen/out.rs", "/src/lib.rs"]
        );
    }

    #[test]
    fn test_select_skips_excluded_subtree() {
        let tree = tree();
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/src/gen");
        let mut set = SelectionSet::new();

        set.toggle(&tree, "/", true, &exclusions);

        assert!(set.contains("/src/lib.rs"));
        assert!(!set.contains("/src/gen"));
        assert!(!set.contains("/src/gen/out.rs"));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_selecting_excluded_path_is_noop() {
        let tree = tree();
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/dist");
        let mut set = SelectionSet::new();

        assert!(!set.toggle(&tree, "/dist", true, &exclusions));
        assert!(!set.toggle(&tree, "/dist/app.js", true, &exclusions));
        assert!(set.is_empty());
    }

    #[test]
    fn test_deselect_ignores_exclusions() {
        let tree = tree();
        let mut set = SelectionSet::new();
        set.toggle(&tree, "/", true, &ExclusionSet::new());

        // Exclude after the fact without cascading, leaving stale selections.
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/dist");

        assert!(set.toggle(&tree, "/", false, &exclusions));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let tree = tree();
        let exclusions = ExclusionSet::new();
        let mut once = SelectionSet::new();
        once.toggle(&tree, "/src", true, &exclusions);

        let mut twice = once.clone();
        twice.toggle(&tree, "/src", true, &exclusions);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unresolved_path_is_noop() {
        let tree = tree();
        let mut set = SelectionSet::new();
        set.toggle(&tree, "/README.md", true, &ExclusionSet::new());

        assert!(!set.toggle(&tree, "/ghost", true, &ExclusionSet::new()));
        assert!(!set.toggle(&tree, "/src/ghost.rs", false, &ExclusionSet::new()));
        assert_eq!(selected(&set), vec!["/README.md"]);
    }

    #[test]
    fn test_deselect_drops_stale_entries() {
        let old = FileTree::from_root(Node::directory(
            "root",
            vec![Node::directory("gone", vec![Node::file("a.txt", Some(1))])],
        ));
        let mut set = SelectionSet::new();
        set.toggle(&old, "/gone", true, &ExclusionSet::new());

        // "/gone" no longer resolves in the current tree.
        assert!(set.toggle(&tree(), "/gone", false, &ExclusionSet::new()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_stores_tree_spelling_of_path() {
        let tree = tree();
        let mut set = SelectionSet::new();

        assert!(set.toggle(&tree, "src/gen/", true, &ExclusionSet::new()));
        assert_eq!(selected(&set), vec!["/src/gen", "/src/gen/out.rs"]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let tree = tree();
        let paths = tree.all_paths();
        let mut exclusions = ExclusionSet::new();
        exclusions.insert("/dist");
        let mut set = SelectionSet::new();

        set.select_all(&paths, &exclusions);
        assert_eq!(set.len(), paths.len() - 2);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_within_is_segment_safe() {
        let mut set = SelectionSet::new();
        for p in ["/dist", "/dist/app.js", "/dist-old", "/src"] {
            set.set(p, true);
        }

        assert_eq!(set.remove_within("/dist"), 2);
        assert_eq!(set.to_vec(), vec!["/dist-old", "/src"]);
        assert_eq!(set.remove_within("/dist"), 0);
    }
}
