//! Depth-first preorder flattening into render nodes.

use crate::tree::node::ProjectedNode;
use crate::tree::prefix::AnnotatedTree;
use crate::types::NodeClass;
use serde::{Deserialize, Serialize};

/// One visual line of the package tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Identifier, equal to the node's path.
    pub id: String,
    pub label: String,
    pub prefix: String,
    pub class: NodeClass,
}

/// Classify a projected node for rendering.
pub fn node_class(node: &ProjectedNode) -> NodeClass {
    if node.is_root {
        NodeClass::Root
    } else if node.is_package {
        NodeClass::Package
    } else {
        NodeClass::NonPackage
    }
}

/// Flatten `tree` in top-to-bottom reading order.
///
/// The root always comes first. When it holds no source files directly its
/// label gets `" (<no_source_marker>)"` appended.
pub fn flatten(tree: &AnnotatedTree, no_source_marker: &str) -> Vec<RenderNode> {
    let root = tree.root();
    let label = if root.is_package {
        root.name.clone()
    } else {
        format!("{} ({})", root.name, no_source_marker)
    };

    let mut nodes = vec![RenderNode {
        id: root.path.clone(),
        label,
        prefix: root.prefix.clone(),
        class: node_class(root),
    }];
    nodes.extend(flatten_children(root));
    nodes
}

fn flatten_children(parent: &ProjectedNode) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    for child in &parent.children {
        nodes.push(RenderNode {
            id: child.path.clone(),
            label: child.name.clone(),
            prefix: child.prefix.clone(),
            class: node_class(child),
        });
        nodes.extend(flatten_children(child));
    }
    nodes
}
