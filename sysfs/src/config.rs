//! # Configuration
//!
//! Where the driver's files live. The kernel module always registers them
//! under [`DEFAULT_DRIVER_PATH`]; other locations exist for tests and for
//! inspecting a copied snapshot of the directory.

use std::path::{Path, PathBuf};

use crate::node::Node;

/// Sysfs directory created by the `ryzen_smu` module
pub const DEFAULT_DRIVER_PATH: &str = "/sys/kernel/ryzen_smu_drv";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the driver files
    base_dir: PathBuf,
}

impl Config {
    /// Configuration rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Replace the driver directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Driver directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path of a driver file
    pub fn path(&self, node: Node) -> PathBuf {
        self.base_dir.join(node.file_name())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DRIVER_PATH)
    }
}
