use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::GraphError;

/// Position of a vertex in its graph, assigned once at insertion
pub type VertexIndex = usize;

/// A directed edge between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexIndex,
    pub to: VertexIndex,
}

impl Edge {
    pub fn new(from: VertexIndex, to: VertexIndex) -> Self {
        Edge { from, to }
    }
}

/// Access to the endpoints of an edge record.
///
/// Adjacency lists are generic over the record they store; duplicate
/// suppression and traversal only ever look at the endpoints.
pub trait EdgeEndpoints {
    fn source(&self) -> VertexIndex;
    fn target(&self) -> VertexIndex;

    /// Whether two records connect the same ordered pair
    fn same_endpoints(&self, other: &Self) -> bool {
        self.source() == other.source() && self.target() == other.target()
    }
}

impl EdgeEndpoints for Edge {
    fn source(&self) -> VertexIndex {
        self.from
    }

    fn target(&self) -> VertexIndex {
        self.to
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53)
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Cost of traversing a single weighted edge, or a cumulative path cost
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and non-negative, as shortest-path search requires
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    /// Saturates at `f64::MAX` so a sum of valid costs stays finite
    fn add(self, other: Self) -> Self {
        let sum = self.0 + other.0;
        if sum.is_finite() {
            Cost(sum)
        } else {
            Cost(f64::MAX)
        }
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(cost as f64)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < EXACT_INTEGER_LIMIT {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A directed edge carrying a traversal cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: VertexIndex,
    pub to: VertexIndex,
    pub cost: Cost,
}

impl WeightedEdge {
    pub fn new(from: VertexIndex, to: VertexIndex, cost: f64) -> Self {
        WeightedEdge {
            from,
            to,
            cost: Cost(cost),
        }
    }
}

impl EdgeEndpoints for WeightedEdge {
    fn source(&self) -> VertexIndex {
        self.from
    }

    fn target(&self) -> VertexIndex {
        self.to
    }
}

pub const STRATEGY_DFS: &str = "dfs";
pub const STRATEGY_BFS: &str = "bfs";
pub const STRATEGY_DIJKSTRA: &str = "dijkstra";

/// Which search produced a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Strategy {
    /// Depth-first, pre-order
    #[default]
    Dfs,
    /// Breadth-first, FIFO
    Bfs,
    /// Minimum cumulative cost (weighted graphs only)
    Dijkstra,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Dfs => STRATEGY_DFS,
            Strategy::Bfs => STRATEGY_BFS,
            Strategy::Dijkstra => STRATEGY_DIJKSTRA,
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            STRATEGY_DFS => Ok(Strategy::Dfs),
            STRATEGY_BFS => Ok(Strategy::Bfs),
            STRATEGY_DIJKSTRA => Ok(Strategy::Dijkstra),
            other => bail_invalid!("strategy (expected: dfs, bfs, dijkstra)", other),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = GraphError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
