//! Read models handed to renderers: status counts, tree rows, and the
//! selection preview.

use serde::Serialize;

use crate::tree::NodeKind;

/// Counts shown in a status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// A non-empty search term is active.
    pub search_active: bool,
    /// Size of the visible set: matches plus their ancestors while searching,
    /// every non-excluded path otherwise.
    pub visible: usize,
    pub total: usize,
    /// Distinct paths hidden because they are effectively excluded.
    pub hidden_by_exclusion: usize,
    pub selected: usize,
}

impl StatusSummary {
    /// "12 items match search / 40 total" or "38 items visible / 40 total".
    pub fn visibility_label(&self) -> String {
        if self.search_active {
            format!("{} items match search / {} total", self.visible, self.total)
        } else {
            format!("{} items visible / {} total", self.visible, self.total)
        }
    }

    /// Present only while something is hidden by exclusion.
    pub fn exclusion_label(&self) -> Option<String> {
        (self.hidden_by_exclusion > 0)
            .then(|| format!("{} items hidden by exclusion", self.hidden_by_exclusion))
    }
}

/// One line of a rendered tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    /// Name to draw; a root named "root" is shown as "Root Directory".
    pub display_name: String,
    pub kind: NodeKind,
    pub size: Option<u64>,
    pub depth: usize,
    pub expanded: bool,
    pub selected: bool,
    /// The directory has at least one visible child.
    pub has_children: bool,
    /// The path itself matches the active search term.
    pub matches_search: bool,
}

impl TreeRow {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// A bounded, sorted slice of the selection for summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPreview {
    pub paths: Vec<String>,
    /// Selected paths left out of `paths`.
    pub remaining: usize,
}
