//! The picker engine: one state container owning selection, exclusion,
//! expansion, and search state over a read-only tree.
//!
//! Every intent runs to completion before returning. Derived views are
//! pure functions of the current state; the visible set and candidate map
//! are cached and refreshed eagerly whenever their inputs change.

mod exclusion;
mod filter;
mod selection;
mod stats;
mod view;

use std::collections::BTreeSet;
use std::fmt;

pub use exclusion::{
    default_suggestions, discover_candidates, CandidateMap, ExclusionSet, DEFAULT_SUGGESTIONS,
};
pub use filter::{compute_visible, matches_search};
pub use selection::{PathStatus, SelectionSet};
pub use stats::{file_extension, format_size, SelectionStats, OTHER_EXTENSION};
pub use view::{SelectionPreview, StatusSummary, TreeRow};

use crate::config::PickerConfig;
use crate::tree::path::{normalize, ROOT};
use crate::tree::{FileTree, NodeId};

/// Callback invoked with the full selection after it changes.
pub type SelectionCallback = Box<dyn FnMut(&[String])>;

pub struct FilePicker {
    tree: FileTree,
    all_paths: Vec<String>,
    suggestions: Vec<String>,
    candidates: CandidateMap,
    selection: SelectionSet,
    exclusions: ExclusionSet,
    expanded: BTreeSet<String>,
    search_term: String,
    visible: BTreeSet<String>,
    on_selection_change: Option<SelectionCallback>,
}

impl FilePicker {
    /// Create a picker with the default suggestions and the root expanded.
    pub fn new(tree: FileTree) -> Self {
        let mut picker = Self {
            tree,
            all_paths: Vec::new(),
            suggestions: default_suggestions(),
            candidates: CandidateMap::new(),
            selection: SelectionSet::new(),
            exclusions: ExclusionSet::new(),
            expanded: BTreeSet::from([ROOT.to_string()]),
            search_term: String::new(),
            visible: BTreeSet::new(),
            on_selection_change: None,
        };
        picker.reindex();
        picker
    }

    pub fn from_config(tree: FileTree, config: &PickerConfig) -> Self {
        Self::new(tree)
            .with_suggestions(config.smart_exclude_suggestions.clone())
            .with_initial_path(config.initial_path.clone())
    }

    /// Replace the exclusion suggestions. An empty list disables discovery.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.set_suggestions(suggestions);
        self
    }

    /// Start with only `path` expanded.
    pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
        self.expanded = BTreeSet::from([normalize(&path.into())]);
        self
    }

    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[String]) + 'static,
    {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    // ---- intents ----
    //
    // Paths are normalized on the way in, so "/a/" and "/a" name the same node.

    /// Select or deselect `path` and its descendants.
    /// Returns false when nothing was applied (an excluded path, or one
    /// missing from the tree); the callback does not fire then.
    pub fn toggle_selection(&mut self, path: &str, select: bool) -> bool {
        let path = normalize(path);
        let path = path.as_str();
        if !self
            .selection
            .toggle(&self.tree, path, select, &self.exclusions)
        {
            tracing::debug!(path, select, "ignored selection of excluded or unknown path");
            return false;
        }
        tracing::debug!(path, select, selected = self.selection.len(), "toggled selection");
        self.notify();
        true
    }

    /// Flip expansion of `path`. Returns the new state.
    pub fn toggle_expanded(&mut self, path: &str) -> bool {
        let path = normalize(path);
        let expand = !self.expanded.contains(&path);
        self.set_expanded(&path, expand);
        expand
    }

    pub fn set_expanded(&mut self, path: &str, expanded: bool) {
        let path = normalize(path);
        if expanded {
            self.expanded.insert(path);
        } else {
            self.expanded.remove(&path);
        }
    }

    /// Expand every visible directory, typically after a search narrows the tree.
    pub fn expand_visible(&mut self) {
        for path in &self.visible {
            if self.tree.get(path).is_some_and(|node| node.is_dir()) {
                self.expanded.insert(path.clone());
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.refresh_visible();
        tracing::debug!(term = %self.search_term, visible = self.visible.len(), "search updated");
    }

    /// Add or remove an exclusion.
    ///
    /// Excluding also drops every selected path at or beneath `path`.
    /// Removing an exclusion does not restore those selections.
    pub fn set_exclusion(&mut self, path: &str, exclude: bool) {
        let path = normalize(path);
        let path = path.as_str();
        if exclude {
            self.exclusions.insert(path);
            let removed = self.selection.remove_within(path);
            tracing::info!(path, deselected = removed, "excluded path");
            self.refresh_visible();
            if removed > 0 {
                self.notify();
            }
        } else {
            self.exclusions.remove(path);
            tracing::info!(path, "removed exclusion");
            self.refresh_visible();
        }
    }

    /// Flip an exact exclusion. Returns true if `path` is now excluded.
    pub fn toggle_exclusion(&mut self, path: &str) -> bool {
        let path = normalize(path);
        let exclude = !self.exclusions.contains(&path);
        self.set_exclusion(&path, exclude);
        exclude
    }

    /// Select every non-excluded path.
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.all_paths, &self.exclusions);
        tracing::debug!(selected = self.selection.len(), "selected all");
        self.notify();
    }

    pub fn clear_all(&mut self) {
        self.selection.clear();
        tracing::debug!("cleared selection");
        self.notify();
    }

    /// Swap in new tree data. Selection and exclusions are kept; entries
    /// that no longer resolve are ignored by the statistics.
    pub fn set_tree(&mut self, tree: FileTree) {
        self.tree = tree;
        self.reindex();
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.refresh_candidates();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_selection_change.as_mut() {
            let paths = self.selection.to_vec();
            callback(&paths);
        }
    }

    fn reindex(&mut self) {
        self.all_paths = self.tree.all_paths();
        tracing::debug!(paths = self.all_paths.len(), "indexed tree");
        self.refresh_candidates();
        self.refresh_visible();
    }

    fn refresh_candidates(&mut self) {
        self.candidates = discover_candidates(&self.tree, &self.all_paths, &self.suggestions);
    }

    fn refresh_visible(&mut self) {
        self.visible = compute_visible(&self.all_paths, &self.search_term, &self.exclusions);
    }

    // ---- read models ----

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn all_paths(&self) -> &[String] {
        &self.all_paths
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn candidates(&self) -> &CandidateMap {
        &self.candidates
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Sorted copy of the selection.
    pub fn selected_paths(&self) -> Vec<String> {
        self.selection.to_vec()
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(&normalize(path))
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn visible_paths(&self) -> &BTreeSet<String> {
        &self.visible
    }

    pub fn is_visible(&self, path: &str) -> bool {
        self.visible.contains(&normalize(path))
    }

    pub fn stats(&self) -> SelectionStats {
        SelectionStats::compute(&self.selection, &self.exclusions, &self.tree)
    }

    pub fn path_status(&self, path: &str) -> PathStatus {
        if self.exclusions.is_excluded(path) {
            PathStatus::Excluded
        } else if self.selection.contains(&normalize(path)) {
            PathStatus::Selected
        } else {
            PathStatus::Unselected
        }
    }

    /// False when the tree is empty or every path is excluded.
    pub fn can_select_all(&self) -> bool {
        self.all_paths
            .iter()
            .any(|path| !self.exclusions.is_excluded(path))
    }

    pub fn status(&self) -> StatusSummary {
        let total = self.all_paths.len();
        let hidden_by_exclusion = if self.exclusions.is_empty() {
            0
        } else {
            self.all_paths
                .iter()
                .filter(|path| self.exclusions.is_excluded(path))
                .count()
        };

        StatusSummary {
            search_active: !self.search_term.is_empty(),
            visible: self.visible.len(),
            total,
            hidden_by_exclusion,
            selected: self.selection.len(),
        }
    }

    /// The first `limit` selected paths in sorted order.
    pub fn selection_preview(&self, limit: usize) -> SelectionPreview {
        let paths: Vec<String> = self.selection.iter().take(limit).map(String::from).collect();
        SelectionPreview {
            remaining: self.selection.len() - paths.len(),
            paths,
        }
    }

    /// Flatten the visible tree into display rows.
    ///
    /// Rows come out in pre-order with siblings sorted by name. Only
    /// expanded directories contribute their children.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        if let Some(root) = self.tree.root {
            self.collect_rows(root, 0, &mut rows);
        }
        rows
    }

    fn collect_rows(&self, id: NodeId, depth: usize, rows: &mut Vec<TreeRow>) {
        let Some(node) = self.tree.get_node(id) else {
            return;
        };
        if !self.visible.contains(&node.path) {
            return;
        }

        let children = self.visible_children(id);
        let expanded = node.is_dir() && self.expanded.contains(&node.path);
        let display_name = if node.path == ROOT && node.name == "root" {
            "Root Directory".to_string()
        } else {
            node.name.clone()
        };

        rows.push(TreeRow {
            path: node.path.clone(),
            name: node.name.clone(),
            display_name,
            kind: node.kind,
            size: node.size,
            depth,
            expanded,
            selected: self.selection.contains(&node.path),
            has_children: !children.is_empty(),
            matches_search: !self.search_term.is_empty()
                && node.path_lower.contains(&self.search_term.to_lowercase()),
        });

        if expanded {
            for child in children {
                self.collect_rows(child, depth + 1, rows);
            }
        }
    }

    fn visible_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<(NodeId, &str)> = self
            .tree
            .get_children(id)
            .into_iter()
            .filter_map(|child| self.tree.get_node(child).map(|n| (child, n)))
            .filter(|(_, n)| self.visible.contains(&n.path))
            .map(|(child, n)| (child, n.segment.as_str()))
            .collect();
        children.sort_by(|a, b| {
            a.1.to_lowercase()
                .cmp(&b.1.to_lowercase())
                .then_with(|| a.1.cmp(b.1))
        });
        children.into_iter().map(|(child, _)| child).collect()
    }
}

impl fmt::Debug for FilePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePicker")
            .field("paths", &self.all_paths.len())
            .field("selected", &self.selection.len())
            .field("excluded", &self.exclusions.len())
            .field("search_term", &self.search_term)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scenario_tree() -> FileTree {
        FileTree::from_root(Node::directory(
            "root",
            vec![
                Node::directory("a", vec![Node::file("x.txt", Some(100))]),
                Node::file("b", Some(50)),
            ],
        ))
    }

    fn project_tree() -> FileTree {
        FileTree::from_root(Node::directory(
            "root",
            vec![
                Node::directory(
                    "web",
                    vec![
                        Node::directory("node_modules", vec![Node::file("react.js", Some(900))]),
                        Node::file("index.ts", Some(40)),
                    ],
                ),
                Node::directory("Docs", vec![Node::file("guide.md", Some(12))]),
                Node::directory("build", vec![Node::file("out.bin", Some(2048))]),
                Node::file("README.md", Some(5)),
            ],
        ))
    }

    /// Picker that records every callback invocation.
    fn recording(tree: FileTree) -> (FilePicker, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let picker = FilePicker::new(tree).on_selection_change(move |paths| {
            sink.borrow_mut().push(paths.to_vec());
        });
        (picker, calls)
    }

    #[test]
    fn test_scenario_select_then_exclude() {
        let (mut picker, calls) = recording(scenario_tree());

        assert!(picker.toggle_selection("/a", true));
        let stats = picker.stats();
        assert_eq!(stats.file_count, 1);
        assert_eq!(stats.dir_count, 1);
        assert_eq!(stats.total_size, 100);
        assert_eq!(stats.file_types.get("txt"), Some(&1));

        picker.set_exclusion("/a", true);
        assert!(!picker.selection().contains("/a"));
        assert!(!picker.selection().contains("/a/x.txt"));
        assert_eq!(picker.stats(), SelectionStats::default());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec!["/a", "/a/x.txt"]);
        assert!(calls[1].is_empty());
    }

    #[test]
    fn test_callback_not_fired_for_view_changes() {
        let (mut picker, calls) = recording(project_tree());

        picker.set_search_term("guide");
        picker.toggle_expanded("/Docs");
        picker.set_exclusion("/build", true);
        picker.set_exclusion("/build", false);
        assert!(calls.borrow().is_empty());

        // Selecting an excluded path is a silent no-op.
        picker.set_exclusion("/build", true);
        assert!(!picker.toggle_selection("/build/out.bin", true));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_path_changes_nothing() {
        let (mut picker, calls) = recording(scenario_tree());

        assert!(!picker.toggle_selection("/ghost", true));
        assert!(!picker.toggle_selection("/a/ghost.txt", false));

        assert!(picker.selection().is_empty());
        assert_eq!(picker.status().selected, 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_intents_normalize_paths() {
        let (mut picker, calls) = recording(scenario_tree());

        assert!(picker.toggle_selection("/a/", true));
        assert_eq!(picker.selected_paths(), vec!["/a", "/a/x.txt"]);
        assert_eq!(picker.path_status("a/"), PathStatus::Selected);

        picker.set_exclusion("a//", true);
        assert!(picker.exclusions().contains("/a"));
        assert!(picker.selection().is_empty());
        assert!(!picker.toggle_exclusion("/a/"));
        assert!(picker.exclusions().is_empty());

        picker.set_expanded("/a/", true);
        assert!(picker.is_expanded("/a"));
        assert!(!picker.toggle_expanded("a"));

        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_callback_fires_for_select_all_and_clear() {
        let (mut picker, calls) = recording(project_tree());

        picker.set_exclusion("/web/node_modules", true);
        picker.select_all();
        picker.clear_all();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), picker.all_paths().len() - 2);
        assert!(calls[1].is_empty());
    }

    #[test]
    fn test_unexclude_does_not_restore_selection() {
        let mut picker = FilePicker::new(project_tree());
        picker.select_all();
        picker.set_exclusion("/build", true);
        picker.set_exclusion("/build", false);

        assert!(!picker.selection().contains("/build"));
        assert!(!picker.selection().contains("/build/out.bin"));
        assert_eq!(picker.path_status("/build"), PathStatus::Unselected);
        assert_eq!(picker.path_status("/README.md"), PathStatus::Selected);
    }

    #[test]
    fn test_path_status_excluded_overrides_selected() {
        let mut picker = FilePicker::new(project_tree());
        picker.set_exclusion("/Docs", true);
        assert_eq!(picker.path_status("/Docs/guide.md"), PathStatus::Excluded);
    }

    #[test]
    fn test_candidates_follow_suggestions() {
        let mut picker = FilePicker::new(project_tree());
        assert_eq!(
            picker.candidates().keys().collect::<Vec<_>>(),
            vec!["/build", "/web/node_modules"]
        );

        picker.set_suggestions(vec!["build".to_string()]);
        assert_eq!(picker.candidates().len(), 1);

        picker.set_suggestions(Vec::new());
        assert!(picker.candidates().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = PickerConfig {
            initial_path: "/web".to_string(),
            smart_exclude_suggestions: vec![],
            color_scheme: "default".to_string(),
        };
        let picker = FilePicker::from_config(project_tree(), &config);

        assert!(picker.is_expanded("/web"));
        assert!(!picker.is_expanded("/"));
        assert!(picker.candidates().is_empty());
    }

    #[test]
    fn test_can_select_all() {
        let mut picker = FilePicker::new(scenario_tree());
        assert!(picker.can_select_all());

        picker.set_exclusion("/", true);
        assert!(!picker.can_select_all());

        assert!(!FilePicker::new(FileTree::new()).can_select_all());
    }

    #[test]
    fn test_status_counts() {
        let mut picker = FilePicker::new(project_tree());
        let total = picker.all_paths().len();

        let status = picker.status();
        assert!(!status.search_active);
        assert_eq!(status.visible, total);
        assert_eq!(status.hidden_by_exclusion, 0);

        picker.set_exclusion("/web", true);
        picker.set_exclusion("/web/node_modules", true);
        let status = picker.status();
        // Overlapping exclusions count each hidden path once.
        assert_eq!(status.hidden_by_exclusion, 4);
        assert_eq!(status.visible, total - 4);

        picker.set_search_term("guide");
        let status = picker.status();
        assert!(status.search_active);
        assert_eq!(status.visible, 3);
    }

    #[test]
    fn test_rows_follow_expansion_and_sort_by_name() {
        let mut picker = FilePicker::new(project_tree());

        let rows = picker.rows();
        let names: Vec<&str> = rows.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Root Directory", "build", "Docs", "README.md", "web"]);
        assert_eq!(rows[0].depth, 0);
        assert!(rows[0].expanded);
        assert!(rows[1].has_children);
        assert!(!rows[1].expanded);

        picker.toggle_expanded("/web");
        let paths: Vec<String> = picker.rows().into_iter().map(|r| r.path).collect();
        assert_eq!(
            &paths[5..],
            &["/web/index.ts".to_string(), "/web/node_modules".to_string()]
        );
    }

    #[test]
    fn test_rows_during_search() {
        let mut picker = FilePicker::new(project_tree());
        picker.set_search_term("GUIDE");
        picker.expand_visible();

        let rows = picker.rows();
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/Docs", "/Docs/guide.md"]);
        assert!(!rows[1].matches_search);
        assert!(rows[2].matches_search);
        assert_eq!(rows[2].depth, 2);
    }

    #[test]
    fn test_selection_preview() {
        let mut picker = FilePicker::new(project_tree());
        picker.select_all();

        let preview = picker.selection_preview(3);
        assert_eq!(preview.paths, vec!["/", "/Docs", "/Docs/guide.md"]);
        assert_eq!(preview.remaining, picker.all_paths().len() - 3);

        picker.clear_all();
        assert_eq!(picker.selection_preview(10), SelectionPreview::default());
    }

    #[test]
    fn test_set_tree_keeps_state_and_reindexes() {
        let mut picker = FilePicker::new(scenario_tree());
        picker.toggle_selection("/a", true);
        picker.set_tree(project_tree());

        assert_eq!(picker.all_paths().len(), project_tree().all_paths().len());
        assert!(picker.selection().contains("/a"));
        // Stale selections resolve to nothing.
        assert_eq!(picker.stats(), SelectionStats::default());
        assert!(picker.candidates().contains_key("/build"));
    }
}
