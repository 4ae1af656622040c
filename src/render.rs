//! Rendering of flattened package trees.
//!
//! The markup form is consumed by a page script that matches entry ids against
//! graph node labels, so every node must produce exactly one line and lines
//! must keep the flattened order.

use crate::error::TreeError;
use crate::tree::RenderNode;
use crate::types::NodeClass;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for a rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(TreeError::ConfigError(format!(
                "Invalid output format: {} (must be 'html', 'json', or 'text')",
                other
            ))),
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render one markup line, including the trailing newline.
pub fn render_html_line(node: &RenderNode) -> String {
    format!(
        "{}<span class=\"{} tree-entry\" id=\"{}\">{}</span><br>\n",
        node.prefix,
        node.class,
        html_escape(&node.id),
        html_escape(&node.label)
    )
}

/// Render the whole tree as markup, one line per node.
pub fn render_html(nodes: &[RenderNode]) -> String {
    nodes.iter().map(render_html_line).collect()
}

/// Render the tree as a JSON array of render nodes.
pub fn render_json(nodes: &[RenderNode]) -> Result<String, TreeError> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Render the tree as plain text, optionally coloured by class.
pub fn render_text(nodes: &[RenderNode], color: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&node.prefix);
        if color {
            let label = match node.class {
                NodeClass::Root => format!("{}", node.label.bold()),
                NodeClass::Package => format!("{}", node.label.green()),
                NodeClass::NonPackage => format!("{}", node.label.dimmed()),
            };
            out.push_str(&label);
        } else {
            out.push_str(&node.label);
        }
        out.push('\n');
    }
    out
}

/// Render `nodes` in the requested format.
pub fn render(nodes: &[RenderNode], format: OutputFormat, color: bool) -> Result<String, TreeError> {
    match format {
        OutputFormat::Html => Ok(render_html(nodes)),
        OutputFormat::Json => render_json(nodes),
        OutputFormat::Text => Ok(render_text(nodes, color)),
    }
}
