//! Aggregate statistics over the current selection.

use std::collections::BTreeMap;

use serde::Serialize;

use super::exclusion::ExclusionSet;
use super::selection::SelectionSet;
use crate::tree::{FileTree, NodeKind};

/// Extension token used for names without one.
pub const OTHER_EXTENSION: &str = "other";

/// Counts and sizes for the selected, non-excluded paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    pub file_count: u64,
    pub dir_count: u64,
    /// Sum of file sizes; directory sizes are never counted.
    pub total_size: u64,
    pub file_types: BTreeMap<String, u64>,
}

impl SelectionStats {
    /// Stale selections (excluded, or no longer in the tree) are skipped.
    pub fn compute(selection: &SelectionSet, exclusions: &ExclusionSet, tree: &FileTree) -> Self {
        let mut stats = Self::default();

        for path in selection.iter() {
            if exclusions.is_excluded(path) {
                continue;
            }
            let Some(node) = tree.get(path) else {
                continue;
            };

            // Sizes come from the host; clamp rather than overflow.
            match node.kind {
                NodeKind::Directory => stats.dir_count = stats.dir_count.saturating_add(1),
                NodeKind::File => {
                    stats.file_count = stats.file_count.saturating_add(1);
                    stats.total_size = stats.total_size.saturating_add(node.size.unwrap_or(0));
                    let count = stats
                        .file_types
                        .entry(file_extension(&node.name))
                        .or_insert(0);
                    *count = count.saturating_add(1);
                }
            }
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.file_count == 0 && self.dir_count == 0
    }
}

/// Lowercased text after the last `.`, or [`OTHER_EXTENSION`].
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => OTHER_EXTENSION.to_string(),
    }
}

/// Format a byte count as a short human-readable size.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    const STEP: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0} {}", rounded, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}
