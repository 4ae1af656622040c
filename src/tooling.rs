//! Tooling
//!
//! Command-line interface over the package tree pipeline.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
