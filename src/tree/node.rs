//! Raw and projected tree node types

use serde::{Deserialize, Serialize};

/// Filesystem snapshot node as supplied by an external scanner.
///
/// Read-only input to the pipeline. `size` is only meaningful for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: String,
    /// Path relative to the scan root.
    pub path: String,
    #[serde(default)]
    pub abs_path: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub children: Vec<RawNode>,
    #[serde(default)]
    pub size: u64,
}

impl RawNode {
    /// Create a directory node with the given children.
    pub fn dir(name: impl Into<String>, path: impl Into<String>, children: Vec<RawNode>) -> Self {
        RawNode {
            name: name.into(),
            path: path.into(),
            abs_path: String::new(),
            is_dir: true,
            children,
            size: 0,
        }
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        RawNode {
            name: name.into(),
            path: path.into(),
            abs_path: String::new(),
            is_dir: false,
            children: Vec::new(),
            size,
        }
    }

    /// Set the absolute path, returning the node.
    pub fn with_abs_path(mut self, abs_path: impl Into<String>) -> Self {
        self.abs_path = abs_path.into();
        self
    }

    /// Whether this node is hidden (dot-prefixed, other than `.` itself).
    pub fn is_hidden(&self) -> bool {
        self.name != "." && self.name.starts_with('.')
    }
}

/// Directory node retained by projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedNode {
    pub name: String,
    pub path: String,
    pub children: Vec<ProjectedNode>,
    /// Directly contains at least one qualifying source file.
    pub is_package: bool,
    pub is_root: bool,
    /// Connector-glyph prefix; empty until annotation.
    pub prefix: String,
}

impl ProjectedNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(ProjectedNode::subtree_len).sum::<usize>()
    }
}
