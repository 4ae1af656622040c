//! Workspace config file source: `<workspace>/codevis.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// File name looked up at the workspace root.
pub const WORKSPACE_CONFIG_FILE: &str = "codevis.toml";

/// Add the workspace config file as an optional source.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
