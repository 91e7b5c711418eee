//! JSON graph documents
//!
//! A document names its vertices and lists its edges by vertex index:
//!
//! ```json
//! { "vertices": ["A", "B", "C"], "edges": [[0, 1], [1, 2, 4.5]], "undirected": true }
//! ```
//!
//! Edge costs are optional; unweighted graphs ignore them and weighted graphs
//! fill missing ones from a default.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexIndex, WeightedGraph};
use crate::trace_time;

/// One edge entry: `[u, v]` or `[u, v, cost]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Plain(VertexIndex, VertexIndex),
    Weighted(VertexIndex, VertexIndex, f64),
}

impl EdgeSpec {
    pub fn endpoints(&self) -> (VertexIndex, VertexIndex) {
        match *self {
            EdgeSpec::Plain(u, v) | EdgeSpec::Weighted(u, v, _) => (u, v),
        }
    }

    pub fn cost(&self) -> Option<f64> {
        match *self {
            EdgeSpec::Plain(..) => None,
            EdgeSpec::Weighted(_, _, cost) => Some(cost),
        }
    }
}

/// Serialized form of a graph with string vertices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    /// Add every edge in both directions
    #[serde(default)]
    pub undirected: bool,
}

impl GraphDocument {
    /// Read a document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read graph document");
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the unweighted graph; edge costs are ignored
    pub fn build_graph(&self) -> Result<Graph<String>> {
        let start = Instant::now();
        let mut graph = Graph::from_parts(self.vertices.iter().cloned(), [])?;
        for edge in &self.edges {
            let (u, v) = edge.endpoints();
            if self.undirected {
                graph.add_undirected_edge(u, v)?;
            } else {
                graph.add_edge(u, v)?;
            }
        }
        trace_time!(start, "build_graph", vertices = graph.len(), edges = graph.edge_count());
        Ok(graph)
    }

    /// Build the weighted graph, costing bare edges at `default_cost`
    pub fn build_weighted(&self, default_cost: f64) -> Result<WeightedGraph<String>> {
        let start = Instant::now();
        let mut graph = WeightedGraph::from_parts(self.vertices.iter().cloned(), [])?;
        for edge in &self.edges {
            let (u, v) = edge.endpoints();
            let cost = edge.cost().unwrap_or(default_cost);
            if self.undirected {
                graph.check_endpoints(u, v)?;
                graph.add_edge(u, v, cost)?;
                graph.add_edge(v, u, cost)?;
            } else {
                graph.add_edge(u, v, cost)?;
            }
        }
        trace_time!(start, "build_weighted", vertices = graph.len(), edges = graph.edge_count());
        Ok(graph)
    }
}
