//! Configuration for graphkit
//!
//! Configuration is read from `graphkit.toml` in the working directory, or
//! from an explicit path. Every section falls back to its defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Cost, Strategy};
use crate::nine_tail::Board;

pub use types::{Config, NineTailConfig, TraversalConfig, WeightedConfig, CONFIG_FILE_NAME};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Path of the config file in `dir`, if one exists
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Load `graphkit.toml` from `dir`, or the defaults when there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject settings no graph operation could honour
    pub fn validate(&self) -> Result<()> {
        if self.traversal.strategy == Strategy::Dijkstra {
            return Err(GraphError::invalid_value(
                "traversal.strategy (expected: dfs, bfs)",
                self.traversal.strategy,
            ));
        }
        if !Cost::new(self.weighted.default_cost).is_valid() {
            return Err(GraphError::invalid_value(
                "weighted.default_cost",
                self.weighted.default_cost,
            ));
        }
        if self.nine_tail.goal.parse::<Board>().is_err() {
            return Err(GraphError::invalid_value(
                "nine_tail.goal (expected nine H/T characters)",
                &self.nine_tail.goal,
            ));
        }
        Ok(())
    }
}
