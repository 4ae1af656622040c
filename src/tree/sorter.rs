//! Sibling ordering.
//!
//! Sorting consumes the projected tree and hands back a new value whose
//! children are in ascending byte order by name at every level. Prefix
//! annotation only accepts a [`SortedTree`], so glyphs are never computed
//! against a sibling order that could still change.

use crate::tree::node::ProjectedNode;
use crate::tree::projector::Projection;

/// Output of the projector, ready for sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTree {
    root: ProjectedNode,
    /// The root survived projection on its own merits.
    kept: bool,
}

impl ProjectedTree {
    pub fn root(&self) -> &ProjectedNode {
        &self.root
    }

    pub fn is_kept(&self) -> bool {
        self.kept
    }

    /// Replace the root's name and path with `identity`, typically the
    /// absolute path of the scanned directory.
    pub fn with_root_identity(mut self, identity: &str) -> Self {
        self.root.name = identity.to_string();
        self.root.path = identity.to_string();
        self
    }
}

impl From<Projection> for ProjectedTree {
    fn from(projection: Projection) -> Self {
        let kept = projection.is_kept();
        ProjectedTree {
            root: projection.into_node(),
            kept,
        }
    }
}

/// Projected tree with final sibling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedTree {
    pub(crate) root: ProjectedNode,
}

impl SortedTree {
    pub fn root(&self) -> &ProjectedNode {
        &self.root
    }
}

/// Order every level of `tree` by name.
pub fn sort(tree: ProjectedTree) -> SortedTree {
    SortedTree {
        root: sort_node(tree.root),
    }
}

fn sort_node(mut node: ProjectedNode) -> ProjectedNode {
    // Stable: equal names keep their projected order.
    node.children.sort_by(|a, b| a.name.cmp(&b.name));
    node.children = node.children.into_iter().map(sort_node).collect();
    node
}
