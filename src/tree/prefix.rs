//! Connector-glyph prefixes.
//!
//! Each non-root node gets the continuation tokens inherited from its
//! ancestors followed by one connector token. All four tokens are three
//! columns wide, so entries at equal depth start in the same column.

use crate::tree::node::ProjectedNode;
use crate::tree::sorter::SortedTree;

/// Connector for a node followed by further siblings.
pub const MIDDLE_CONNECTOR: &str = "├─ ";
/// Connector for the last sibling.
pub const LAST_CONNECTOR: &str = "└─ ";
/// Continuation under a node that has further siblings. Bar plus two
/// spaces, so it is as wide as [`MIDDLE_CONNECTOR`] and columns line up.
pub const VERTICAL_CONTINUATION: &str = "│  ";
/// Continuation under the last sibling.
pub const BLANK_CONTINUATION: &str = "   ";

/// Sorted tree whose nodes carry their final prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTree {
    pub(crate) root: ProjectedNode,
}

impl AnnotatedTree {
    pub fn root(&self) -> &ProjectedNode {
        &self.root
    }
}

/// Compute prefixes for every node of a sorted tree. The root keeps an
/// empty prefix.
pub fn annotate(tree: SortedTree) -> AnnotatedTree {
    let mut root = tree.root;
    root.prefix.clear();
    annotate_children(&mut root, "");
    AnnotatedTree { root }
}

fn annotate_children(parent: &mut ProjectedNode, inherited: &str) {
    let last = parent.children.len().saturating_sub(1);
    for (i, child) in parent.children.iter_mut().enumerate() {
        let is_last = i == last;
        let (connector, continuation) = if is_last {
            (LAST_CONNECTOR, BLANK_CONTINUATION)
        } else {
            (MIDDLE_CONNECTOR, VERTICAL_CONTINUATION)
        };

        child.prefix = format!("{inherited}{connector}");
        let child_inherited = format!("{inherited}{continuation}");
        annotate_children(child, &child_inherited);
    }
}
