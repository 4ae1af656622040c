//! Config composition: defaults and source precedence.

pub mod service;

pub(crate) mod merge_policy {
    use crate::types::{DEFAULT_ENTRY_FILE, DEFAULT_NO_SOURCE_MARKER, DEFAULT_SOURCE_SUFFIX};
    use crate::tree::projector::DEFAULT_MAX_DEPTH;
    use config::builder::DefaultState;
    use config::{Config, ConfigBuilder, ConfigError};

    /// Builder seeded with built-in defaults, the lowest-precedence layer.
    pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("tree.source_suffix", DEFAULT_SOURCE_SUFFIX)?
            .set_default("tree.entry_file", DEFAULT_ENTRY_FILE)?
            .set_default("tree.no_source_marker", DEFAULT_NO_SOURCE_MARKER)?
            .set_default("tree.skip_hidden", true)?
            .set_default("tree.max_depth", DEFAULT_MAX_DEPTH as i64)
    }
}
