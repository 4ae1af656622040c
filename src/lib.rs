//! Codevis: package directory trees
//!
//! Projects a filesystem snapshot onto the directories that hold (or lead to)
//! source packages, orders and annotates it with tree glyphs, and flattens it
//! into render nodes for a markup page.

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod snapshot;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::TreeError;
pub use pipeline::{build_render_nodes, render_tree, PipelineOptions};
pub use render::OutputFormat;
pub use tree::{RawNode, RenderNode};
pub use types::NodeClass;
