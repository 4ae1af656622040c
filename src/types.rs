//! Core types shared across the package tree pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default suffix of a qualifying source file.
pub const DEFAULT_SOURCE_SUFFIX: &str = ".go";

/// Default name of the program entry file.
pub const DEFAULT_ENTRY_FILE: &str = "main.go";

/// Default marker appended to a root label that holds no source files itself.
pub const DEFAULT_NO_SOURCE_MARKER: &str = "no source files";

/// Visual class of a rendered tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeClass {
    Root,
    Package,
    NonPackage,
}

impl NodeClass {
    /// CSS class name used by the markup renderer.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Root => "root",
            NodeClass::Package => "package",
            NodeClass::NonPackage => "non-package",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
