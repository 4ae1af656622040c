//! Projection of a raw snapshot onto the package-relevant directories.
//!
//! A directory survives projection when it directly holds a qualifying source
//! file or when at least one of its subdirectories survives. Everything else is
//! pruned along with its descendants. The root is always handed back to the
//! caller, tagged with whether it would have survived on its own merits.

use crate::error::TreeError;
use crate::tree::node::{ProjectedNode, RawNode};
use crate::types::DEFAULT_SOURCE_SUFFIX;
use tracing::debug;

/// Default bound on directory nesting accepted by the projector.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// File-name suffix marking a qualifying source file.
    pub source_suffix: String,
    /// Do not descend into dot-directories, and ignore dot-files.
    pub skip_hidden: bool,
    pub max_depth: usize,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            skip_hidden: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ProjectionOptions {
    /// Whether `node` is a file that counts towards package status.
    pub fn qualifies(&self, node: &RawNode) -> bool {
        if node.is_dir || (self.skip_hidden && node.is_hidden()) {
            return false;
        }
        node.name.ends_with(&self.source_suffix)
    }
}

/// Outcome of projecting one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// The directory is package-relevant.
    Kept(ProjectedNode),
    /// Nothing under the directory qualifies. Only ever surfaced for the root.
    Pruned(ProjectedNode),
}

impl Projection {
    pub fn is_kept(&self) -> bool {
        matches!(self, Projection::Kept(_))
    }

    pub fn node(&self) -> &ProjectedNode {
        match self {
            Projection::Kept(node) | Projection::Pruned(node) => node,
        }
    }

    /// Unwrap the node regardless of outcome.
    pub fn into_node(self) -> ProjectedNode {
        match self {
            Projection::Kept(node) | Projection::Pruned(node) => node,
        }
    }
}

/// Reject roots that cannot anchor a tree.
pub fn validate_root(raw: &RawNode) -> Result<(), TreeError> {
    if !raw.is_dir {
        return Err(TreeError::InvalidInput(format!(
            "root '{}' is not a directory",
            raw.path
        )));
    }
    if raw.path.trim().is_empty() && raw.abs_path.trim().is_empty() {
        return Err(TreeError::InvalidInput(
            "root has neither a relative nor an absolute path".to_string(),
        ));
    }
    Ok(())
}

/// Project a raw snapshot rooted at `raw`.
///
/// The returned node is flagged as root. Fails on an invalid root or when the
/// snapshot nests deeper than `options.max_depth`.
pub fn project(raw: &RawNode, options: &ProjectionOptions) -> Result<Projection, TreeError> {
    validate_root(raw)?;
    let projection = project_dir(raw, options, 0)?;
    Ok(match projection {
        Projection::Kept(mut node) => {
            node.is_root = true;
            Projection::Kept(node)
        }
        Projection::Pruned(mut node) => {
            node.is_root = true;
            Projection::Pruned(node)
        }
    })
}

fn project_dir(
    raw: &RawNode,
    options: &ProjectionOptions,
    depth: usize,
) -> Result<Projection, TreeError> {
    if depth > options.max_depth {
        return Err(TreeError::DepthLimitExceeded {
            path: raw.path.clone(),
            limit: options.max_depth,
        });
    }

    let mut children = Vec::new();
    for child in raw.children.iter().filter(|c| c.is_dir) {
        if options.skip_hidden && child.is_hidden() {
            continue;
        }
        match project_dir(child, options, depth + 1)? {
            Projection::Kept(node) => children.push(node),
            Projection::Pruned(_) => debug!(path = %child.path, "pruned directory"),
        }
    }

    let is_package = raw.children.iter().any(|c| options.qualifies(c));
    let keep = is_package || !children.is_empty();
    let node = ProjectedNode {
        name: raw.name.clone(),
        path: raw.path.clone(),
        children,
        is_package,
        is_root: false,
        prefix: String::new(),
    };

    Ok(if keep {
        Projection::Kept(node)
    } else {
        Projection::Pruned(node)
    })
}
