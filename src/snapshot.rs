//! Snapshot loading
//!
//! A snapshot is a JSON document whose top-level value is a [`RawNode`]
//! object, as produced by an external scanner. `null` stands for an absent
//! tree and is rejected.
//!
//! Decoding runs without serde_json's nesting limit; depth is bounded later by
//! the projector's `max_depth`.

use crate::error::TreeError;
use crate::tree::RawNode;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Decode a snapshot from a reader.
pub fn read_snapshot<R: Read>(reader: R) -> Result<RawNode, TreeError> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    de.disable_recursion_limit();
    let root = Option::<RawNode>::deserialize(&mut de)?;
    de.end()?;
    root.ok_or_else(|| TreeError::InvalidInput("snapshot contains no root".to_string()))
}

/// Decode a snapshot from a string.
pub fn parse_snapshot(data: &str) -> Result<RawNode, TreeError> {
    read_snapshot(data.as_bytes())
}

/// Load a snapshot from `path`, or from stdin when `path` is `-`.
pub fn load_snapshot(path: &Path) -> Result<RawNode, TreeError> {
    if path.as_os_str() == "-" {
        debug!("reading snapshot from stdin");
        return read_snapshot(std::io::stdin().lock());
    }
    debug!(path = %path.display(), "reading snapshot");
    let file = File::open(path)?;
    read_snapshot(BufReader::new(file))
}
