use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;

use crate::picker::{FilePicker, SelectionStats};

/// A selected path in the exported report
#[derive(Debug, Serialize)]
pub struct ExportEntry {
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub is_dir: bool,
}

/// Snapshot of a picker's selection, written by `--json` and on exit
#[derive(Debug, Serialize)]
pub struct SelectionReport {
    /// RFC 3339 timestamp of when the report was built
    pub generated_at: String,
    pub selected: Vec<ExportEntry>,
    pub excluded: Vec<String>,
    pub stats: SelectionStats,
}

/// Options for customizing the JSON export
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportOptions {
    /// Only list selected files, not directories
    pub files_only: bool,
}

impl SelectionReport {
    /// Build a report from the picker's current state.
    ///
    /// Stale selections (excluded, or no longer in the tree) are left out,
    /// matching what the statistics count.
    pub fn from_picker(picker: &FilePicker, options: &ExportOptions) -> Self {
        let tree = picker.tree();
        let exclusions = picker.exclusions();

        let selected = picker
            .selection()
            .iter()
            .filter(|path| !exclusions.is_excluded(path))
            .filter_map(|path| tree.get(path))
            .filter(|node| !options.files_only || !node.is_dir())
            .map(|node| ExportEntry {
                path: node.path.clone(),
                name: node.name.clone(),
                size: node.size,
                is_dir: node.is_dir(),
            })
            .collect();

        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            selected,
            excluded: exclusions.iter().map(String::from).collect(),
            stats: picker.stats(),
        }
    }
}

/// Export the picker's selection to JSON format
///
/// # Arguments
/// * `picker` - The picker to report on
/// * `options` - Export options
/// * `writer` - Output writer for the JSON
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(std::io::Error)` on write failure
pub fn export_json(
    picker: &FilePicker,
    options: &ExportOptions,
    writer: &mut impl Write,
) -> Result<(), std::io::Error> {
    let report = SelectionReport::from_picker(picker, options);
    serde_json::to_writer_pretty(writer, &report).map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FileTree, Node};

    fn create_test_picker() -> FilePicker {
        let tree = FileTree::from_root(Node::directory(
            "root",
            vec![
                Node::directory(
                    "src",
                    vec![
                        Node::file("main.rs", Some(1000)),
                        Node::file("lib.rs", Some(500)),
                    ],
                ),
                Node::directory("target", vec![Node::file("app", Some(9000))]),
                Node::file("Cargo.toml", Some(100)),
            ],
        ));
        FilePicker::new(tree)
    }

    fn export(picker: &FilePicker, options: ExportOptions) -> serde_json::Value {
        let mut buffer = Vec::new();
        export_json(picker, &options, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_export_selection() {
        let mut picker = create_test_picker();
        picker.set_exclusion("/target", true);
        picker.select_all();

        let output = export(&picker, ExportOptions::default());

        let paths: Vec<&str> = output["selected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect();
        assert_eq!(
            paths,
            vec!["/", "/Cargo.toml", "/src", "/src/lib.rs", "/src/main.rs"]
        );
        assert_eq!(output["excluded"], serde_json::json!(["/target"]));
        assert_eq!(output["stats"]["file_count"], 3);
        assert_eq!(output["stats"]["total_size"], 1600);
        assert!(output["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_export_files_only() {
        let mut picker = create_test_picker();
        picker.toggle_selection("/src", true);

        let output = export(&picker, ExportOptions { files_only: true });

        let selected = output["selected"].as_array().unwrap();
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|e| e["is_dir"] == false));
        // Stats still describe the whole selection.
        assert_eq!(output["stats"]["dir_count"], 1);
    }

    #[test]
    fn test_export_skips_stale_selection() {
        let mut picker = create_test_picker();
        picker.toggle_selection("/target", true);
        picker.set_tree(FileTree::from_root(Node::directory(
            "root",
            vec![Node::file("Cargo.toml", Some(100))],
        )));
        assert!(picker.selection().contains("/target/app"));

        let output = export(&picker, ExportOptions::default());
        assert_eq!(output["selected"], serde_json::json!([]));
        assert_eq!(output["stats"]["file_count"], 0);
    }

    #[test]
    fn test_export_empty_tree() {
        let picker = FilePicker::new(FileTree::new());

        let output = export(&picker, ExportOptions::default());
        assert_eq!(output["selected"], serde_json::json!([]));
        assert_eq!(output["stats"]["file_count"], 0);
    }
}
