//! CLI Tooling
//!
//! Command-line interface for rendering package trees from scanner snapshots.

use crate::config::{CodevisConfig, ConfigLoader};
use crate::error::TreeError;
use crate::logging::LoggingConfig;
use crate::pipeline::{build_render_nodes, render_tree, summarize};
use crate::render::OutputFormat;
use crate::snapshot::load_snapshot;
use crate::tooling::format::format_summary_text;
use crate::tree::{locate_entry_dir, RawNode};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Codevis CLI - package directory trees for dependency graph pages
#[derive(Debug, Parser)]
#[command(name = "codevis")]
#[command(about = "Render pruned package-directory trees from filesystem snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (used to find codevis.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source file suffix (overrides tree.source_suffix)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging config with CLI flags applied over `base`.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the package tree of a snapshot
    Render {
        /// Snapshot JSON file, or - for stdin
        snapshot: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Colour text output by entry class
        #[arg(long)]
        color: bool,
    },
    /// Print the directory holding the program entry file
    Entry {
        /// Snapshot JSON file, or - for stdin
        snapshot: PathBuf,
    },
    /// Show entry counts by class
    Summary {
        /// Snapshot JSON file, or - for stdin
        snapshot: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

/// Output format of the `summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Loaded configuration plus the operations the CLI exposes.
pub struct CliContext {
    workspace_root: PathBuf,
    config: CodevisConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration for `workspace_root`.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, TreeError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Create a context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: CodevisConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &CodevisConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Override the source suffix after loading.
    pub fn set_source_suffix(&mut self, suffix: String) -> Result<(), TreeError> {
        self.config.tree.source_suffix = suffix;
        self.config.validate()
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, TreeError> {
        match command {
            Commands::Render {
                snapshot,
                format,
                color,
            } => {
                let raw = load_snapshot(snapshot)?;
                render_tree(&raw, &self.config.tree.pipeline_options(), *format, *color)
            }
            Commands::Entry { snapshot } => {
                let raw = load_snapshot(snapshot)?;
                Ok(self.entry_message(&raw))
            }
            Commands::Summary { snapshot, format } => {
                let raw = load_snapshot(snapshot)?;
                let nodes = build_render_nodes(&raw, &self.config.tree.pipeline_options())?;
                let summary = summarize(&nodes);
                let root = nodes.first().map(|n| n.id.as_str()).unwrap_or_default();
                match format {
                    SummaryFormat::Json => {
                        let value = json!({
                            "root": root,
                            "total": summary.total,
                            "packages": summary.packages,
                            "pass_through": summary.pass_through,
                            "max_depth": summary.max_depth,
                        });
                        Ok(serde_json::to_string_pretty(&value)?)
                    }
                    SummaryFormat::Text => Ok(format_summary_text(root, &summary)),
                }
            }
        }
    }

    fn entry_message(&self, raw: &RawNode) -> String {
        let entry_file = &self.config.tree.entry_file;
        match locate_entry_dir(raw, entry_file, self.config.tree.skip_hidden) {
            Some(dir) => {
                info!(entry_file = %entry_file, dir, "entry directory located");
                dir.to_string()
            }
            None => {
                warn!(entry_file = %entry_file, "entry file not found; call visualisation is not available");
                format!("No '{}' found in snapshot.", entry_file)
            }
        }
    }
}
