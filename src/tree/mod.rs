mod node;
pub mod path;

pub use indextree::NodeId;
pub use node::{FileNode, FileTree, Node, NodeKind};
