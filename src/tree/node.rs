use std::collections::BTreeMap;
use std::path::Path;

use indextree::{Arena, NodeId};
use serde::{Deserialize, Serialize};

use super::path::{join, segments, ROOT};
use crate::error::{PickerError, Result};

/// Whether a node is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Caller-supplied description of a file or directory.
///
/// Serializes to the same JSON shape hosts already hand to the picker:
/// `{"type": "directory", "name": "src", "children": {"main.rs": {...}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, Node>>,
}

impl Node {
    pub fn file(name: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            kind: NodeKind::File,
            name: name.into(),
            size,
            children: None,
        }
    }

    /// Build a directory whose children are keyed by their own names.
    /// A later child with a duplicate name replaces the earlier one.
    pub fn directory(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        let children: BTreeMap<String, Node> = children
            .into_iter()
            .map(|child| (child.name.clone(), child))
            .collect();

        Self {
            kind: NodeKind::Directory,
            name: name.into(),
            size: None,
            children: Some(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Top-level JSON accepted by [`FileTree::from_json_str`].
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeData {
    Bare(Node),
    Rooted(BTreeMap<String, Node>),
}

/// A node as stored in the tree index.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Path segment this node is addressed by (its key in the parent).
    pub segment: String,
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    pub size: Option<u64>,
    /// Pre-computed lowercase path for search
    pub path_lower: String,
}

impl FileNode {
    fn new(segment: &str, node: &Node, path: String) -> Self {
        let path_lower = path.to_lowercase();
        Self {
            segment: segment.to_string(),
            name: node.name.clone(),
            path,
            kind: node.kind,
            size: node.size,
            path_lower,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Read-only, path-addressed index over a caller-supplied tree.
///
/// Nodes live in an arena; only directory children are indexed, so a
/// file never has descendants.
#[derive(Debug, Clone)]
pub struct FileTree {
    arena: Arena<FileNode>,
    pub root: Option<NodeId>,
}

impl FileTree {
    /// Create an empty tree with no root. Every path fails to resolve.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Index a tree rooted at `root`, addressed as `"/"`.
    pub fn from_root(root: Node) -> Self {
        let mut arena = Arena::new();
        let root_id = arena.new_node(FileNode::new(ROOT, &root, ROOT.to_string()));
        let mut tree = Self {
            arena,
            root: Some(root_id),
        };
        tree.index_children(root_id, &root);
        tree
    }

    fn index_children(&mut self, parent_id: NodeId, node: &Node) {
        if !node.is_dir() {
            return;
        }
        let Some(children) = node.children.as_ref() else {
            return;
        };

        let parent_path = match self.get_node(parent_id) {
            Some(parent) => parent.path.clone(),
            None => return,
        };

        for (segment, child) in children {
            let child_path = join(&parent_path, segment);
            let child_id = self.add_child(parent_id, FileNode::new(segment, child, child_path));
            self.index_children(child_id, child);
        }
    }

    /// Parse tree JSON: either a bare root node, or a map whose `"/"`
    /// entry is the root. A map without `"/"` yields an empty tree.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let data: TreeData = serde_json::from_str(json)?;
        Ok(match data {
            TreeData::Bare(root) => Self::from_root(root),
            TreeData::Rooted(mut entries) => match entries.remove(ROOT) {
                Some(root) => Self::from_root(root),
                None => {
                    tracing::warn!(
                        keys = entries.len(),
                        "tree data has no \"/\" entry, using an empty tree"
                    );
                    Self::new()
                }
            },
        })
    }

    /// Load tree JSON from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PickerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_json_str(&content).map_err(|source| PickerError::InvalidTree {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), nodes = tree.node_count(), "loaded tree");
        Ok(tree)
    }

    fn add_child(&mut self, parent_id: NodeId, node: FileNode) -> NodeId {
        let child_id = self.arena.new_node(node);
        parent_id.append(child_id, &mut self.arena);
        child_id
    }

    /// Get a reference to a node
    pub fn get_node(&self, id: NodeId) -> Option<&FileNode> {
        self.arena.get(id).map(|n| n.get())
    }

    /// Get children of a node
    pub fn get_children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Get parent of a node
    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent())
    }

    /// Resolve a path by walking segments down from the root.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root?;
        for seg in segments(path) {
            current = current
                .children(&self.arena)
                .find(|&child| self.get_node(child).is_some_and(|n| n.segment == seg))?;
        }
        Some(current)
    }

    /// Resolve a path straight to its node.
    pub fn get(&self, path: &str) -> Option<&FileNode> {
        self.resolve(path).and_then(|id| self.get_node(id))
    }

    /// Every path in the tree, each emitted before its descendants.
    pub fn all_paths(&self) -> Vec<String> {
        match self.root {
            Some(root) => root
                .descendants(&self.arena)
                .filter_map(|id| self.get_node(id))
                .map(|n| n.path.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Count total nodes in tree
    pub fn node_count(&self) -> usize {
        self.arena.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new()
    }
}
