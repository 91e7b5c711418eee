//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{Strategy, VertexIndex};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphkit.toml";

/// Top-level graphkit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for unweighted traversals
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Defaults for weighted graphs
    #[serde(default)]
    pub weighted: WeightedConfig,

    /// Nine-tail puzzle settings
    #[serde(default)]
    pub nine_tail: NineTailConfig,
}

/// Configuration for unweighted traversals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Search used when none is given on the command line
    #[serde(default)]
    pub strategy: Strategy,

    /// Start vertex used when none is given on the command line
    #[serde(default)]
    pub start: VertexIndex,
}

/// Configuration for weighted graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedConfig {
    /// Cost given to document edges that carry no cost (default 1.0)
    #[serde(default = "default_edge_cost")]
    pub default_cost: f64,
}

impl Default for WeightedConfig {
    fn default() -> Self {
        Self {
            default_cost: default_edge_cost(),
        }
    }
}

/// Configuration for the nine-tail puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NineTailConfig {
    /// Target board, nine `H`/`T` characters in row-major order
    #[serde(default = "default_goal")]
    pub goal: String,
}

impl Default for NineTailConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
        }
    }
}

fn default_edge_cost() -> f64 {
    1.0
}

fn default_goal() -> String {
    "TTTTTTTTT".to_string()
}
