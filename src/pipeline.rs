//! Package Tree Pipeline
//!
//! Runs project → sort → annotate → flatten over one snapshot. Each stage
//! consumes the previous stage's type, so the order cannot be rearranged by
//! callers. Nothing is shared between runs.

use crate::error::TreeError;
use crate::render::{render, OutputFormat};
use crate::tree::prefix::LAST_CONNECTOR;
use crate::tree::{
    annotate, flatten, project, sort, ProjectedTree, ProjectionOptions, RawNode, RenderNode,
};
use crate::types::{NodeClass, DEFAULT_NO_SOURCE_MARKER};
use serde::Serialize;
use tracing::info;

/// Options for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub projection: ProjectionOptions,
    /// Appended in parentheses to the root label when the root holds no
    /// source files itself.
    pub no_source_marker: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionOptions::default(),
            no_source_marker: DEFAULT_NO_SOURCE_MARKER.to_string(),
        }
    }
}

/// Identity used for the root entry: the absolute path when known.
fn root_identity(raw: &RawNode) -> &str {
    if raw.abs_path.is_empty() {
        &raw.path
    } else {
        &raw.abs_path
    }
}

/// Build the ordered render nodes for `raw`.
pub fn build_render_nodes(
    raw: &RawNode,
    options: &PipelineOptions,
) -> Result<Vec<RenderNode>, TreeError> {
    let projection = project(raw, &options.projection)?;
    let projected = ProjectedTree::from(projection).with_root_identity(root_identity(raw));
    if !projected.is_kept() {
        info!(
            root = root_identity(raw),
            suffix = %options.projection.source_suffix,
            "no source files found under root"
        );
    }

    let annotated = annotate(sort(projected));
    let nodes = flatten(&annotated, &options.no_source_marker);

    info!(nodes = nodes.len(), "package tree flattened");
    Ok(nodes)
}

/// Build and render the package tree for `raw` in one call.
pub fn render_tree(
    raw: &RawNode,
    options: &PipelineOptions,
    format: OutputFormat,
    color: bool,
) -> Result<String, TreeError> {
    let nodes = build_render_nodes(raw, options)?;
    let rendered = render(&nodes, format, color)?;
    info!(format = %format, bytes = rendered.len(), "package tree rendered");
    Ok(rendered)
}

/// Counts over a flattened tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub total: usize,
    pub packages: usize,
    pub pass_through: usize,
    /// Depth of the deepest entry; the root is depth 0.
    pub max_depth: usize,
}

/// Summarize a flattened tree.
pub fn summarize(nodes: &[RenderNode]) -> TreeSummary {
    let token_width = LAST_CONNECTOR.chars().count();
    let mut summary = TreeSummary {
        total: nodes.len(),
        ..Default::default()
    };
    for node in nodes {
        match node.class {
            NodeClass::Root => {}
            NodeClass::Package => summary.packages += 1,
            NodeClass::NonPackage => summary.pass_through += 1,
        }
        let depth = node.prefix.chars().count() / token_width;
        summary.max_depth = summary.max_depth.max(depth);
    }
    summary
}
