//! Smart exclusions: discovering directories worth excluding (build output,
//! dependency caches, VCS metadata) and tracking the ones the user excluded.

use std::collections::{BTreeMap, BTreeSet};

use crate::tree::path::{is_within, prefixes};
use crate::tree::FileTree;

/// Directory names offered for one-click exclusion unless the host overrides them.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "vendor",
    "bower_components",
    ".cache",
    "__pycache__",
];

/// Exclusion candidates: directory path to the suggestion its name matched.
pub type CandidateMap = BTreeMap<String, String>;

/// Owned copy of [`DEFAULT_SUGGESTIONS`].
pub fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Find every directory whose name exactly equals a suggestion.
///
/// Each path is walked from the root down, so a path gets at most one entry
/// and the first suggestion recorded for it wins. Files never qualify.
pub fn discover_candidates(
    tree: &FileTree,
    all_paths: &[String],
    suggestions: &[String],
) -> CandidateMap {
    let mut candidates = CandidateMap::new();
    if suggestions.is_empty() {
        return candidates;
    }

    for path in all_paths {
        for (prefix, segment) in prefixes(path) {
            if candidates.contains_key(&prefix) {
                continue;
            }
            let Some(suggestion) = suggestions.iter().find(|s| s.as_str() == segment) else {
                continue;
            };
            if tree.get(&prefix).is_some_and(|node| node.is_dir()) {
                candidates.insert(prefix, suggestion.clone());
            }
        }
    }

    tracing::trace!(count = candidates.len(), "discovered exclusion candidates");
    candidates
}

/// Paths the user has explicitly excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the path was not already excluded.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Returns true if the path had been excluded.
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    /// Exact membership: `path` itself was excluded.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Effective exclusion: `path` is an excluded path or lies beneath one.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.paths.iter().any(|excluded| is_within(path, excluded))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
