//! Entry-point discovery.

use crate::tree::node::RawNode;

/// Path of the first directory, in depth-first input order, that directly
/// contains a file named `entry_file`. With `skip_hidden` set, dot-directories
/// are not searched, matching what the projector keeps.
pub fn locate_entry_dir<'a>(
    raw: &'a RawNode,
    entry_file: &str,
    skip_hidden: bool,
) -> Option<&'a str> {
    for child in &raw.children {
        if !child.is_dir && child.name == entry_file {
            return Some(raw.path.as_str());
        }
        if child.is_dir && !(skip_hidden && child.is_hidden()) {
            if let Some(path) = locate_entry_dir(child, entry_file, skip_hidden) {
                return Some(path);
            }
        }
    }
    None
}
