//! Configuration
//!
//! Layered configuration for tree rendering and logging. Sources, from lowest
//! to highest precedence: built-in defaults, `$XDG_CONFIG_HOME/codevis/config.toml`,
//! `<workspace>/codevis.toml`, `CODEVIS__*` environment variables. CLI flags are
//! applied on top by the caller.

pub mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

use crate::error::TreeError;
use crate::logging::LoggingConfig;
use crate::pipeline::PipelineOptions;
use crate::tree::projector::{ProjectionOptions, DEFAULT_MAX_DEPTH};
use crate::types::{DEFAULT_ENTRY_FILE, DEFAULT_NO_SOURCE_MARKER, DEFAULT_SOURCE_SUFFIX};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodevisConfig {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodevisConfig {
    pub fn validate(&self) -> Result<(), TreeError> {
        self.tree.validate()
    }
}

fn default_source_suffix() -> String {
    DEFAULT_SOURCE_SUFFIX.to_string()
}

fn default_entry_file() -> String {
    DEFAULT_ENTRY_FILE.to_string()
}

fn default_no_source_marker() -> String {
    DEFAULT_NO_SOURCE_MARKER.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_true() -> bool {
    true
}

/// Tree projection and labelling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Suffix of a qualifying source file (default: ".go")
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,

    /// File whose directory is reported as the program entry (default: "main.go")
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Root label marker when the root holds no source files itself
    #[serde(default = "default_no_source_marker")]
    pub no_source_marker: String,

    /// Skip dot-directories and dot-files (default: true)
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Maximum directory nesting accepted before failing (default: 256)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            source_suffix: default_source_suffix(),
            entry_file: default_entry_file(),
            no_source_marker: default_no_source_marker(),
            skip_hidden: default_true(),
            max_depth: default_max_depth(),
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.source_suffix.trim().is_empty() {
            return Err(TreeError::ConfigError(
                "tree.source_suffix cannot be empty".to_string(),
            ));
        }
        if self.entry_file.trim().is_empty() {
            return Err(TreeError::ConfigError(
                "tree.entry_file cannot be empty".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(TreeError::ConfigError(
                "tree.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Pipeline options derived from this configuration.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            projection: ProjectionOptions {
                source_suffix: self.source_suffix.clone(),
                skip_hidden: self.skip_hidden,
                max_depth: self.max_depth,
            },
            no_source_marker: self.no_source_marker.clone(),
        }
    }
}
