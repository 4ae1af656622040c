//! XDG Base Directory lookup for configuration files.

use crate::error::TreeError;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Result<PathBuf, TreeError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        TreeError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Path of the user-wide config file: `$XDG_CONFIG_HOME/codevis/config.toml`.
///
/// The file is not required to exist.
pub fn global_config_path() -> Result<PathBuf, TreeError> {
    Ok(config_home()?.join("codevis").join("config.toml"))
}
