//! pathpick: a path selection engine for file and directory pickers.
//!
//! Hosts hand over a tree of [`Node`]s and drive a [`FilePicker`] with
//! intents (toggle selection, search, exclude). The picker keeps selection,
//! exclusion, and expansion state consistent and exposes read models
//! (visible paths, rows, statistics) for any renderer.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod picker;
pub mod tree;

pub use config::PickerConfig;
pub use error::{PickerError, Result};
pub use export::{export_json, ExportOptions, SelectionReport};
pub use picker::{
    CandidateMap, ExclusionSet, FilePicker, PathStatus, SelectionPreview, SelectionSet,
    SelectionStats, StatusSummary, TreeRow,
};
pub use tree::{FileNode, FileTree, Node, NodeKind};
