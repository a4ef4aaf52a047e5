//! Configuration for depviz.
//!
//! An optional `depviz.toml` at the project root supplies ignore
//! directories and layout parameters; CLI flags layer on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::LayoutParams;

/// Name of the config file looked up at the project root.
pub const CONFIG_FILE: &str = "depviz.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories to skip while scanning, relative to the root.
    pub ignore: Vec<PathBuf>,
    /// Layout parameters.
    pub layout: LayoutParams,
}

impl Config {
    /// Load `depviz.toml` from `root` if present; defaults otherwise.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }
}
