//! Package tree construction: projection, ordering, prefix annotation and
//! flattening over an in-memory filesystem snapshot.

pub mod entry;
pub mod flatten;
pub mod node;
pub mod prefix;
pub mod projector;
pub mod sorter;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entry::locate_entry_dir;
pub use flatten::{flatten, node_class, RenderNode};
pub use node::{ProjectedNode, RawNode};
pub use prefix::{annotate, AnnotatedTree};
pub use projector::{project, Projection, ProjectionOptions};
pub use sorter::{sort, ProjectedTree, SortedTree};
