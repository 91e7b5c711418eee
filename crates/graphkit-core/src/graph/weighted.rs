use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::types::{Cost, VertexIndex, WeightedEdge};

/// Directed graph whose edges carry a non-negative cost
pub type WeightedGraph<V> = AdjacencyGraph<V, WeightedEdge>;

impl<V: PartialEq> WeightedGraph<V> {
    /// Build a weighted graph from a vertex list and an edge list.
    ///
    /// A repeated vertex value is rejected, as for the unweighted graph.
    pub fn from_parts<I, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = WeightedEdge>,
    {
        let mut graph = WeightedGraph::new();
        for (position, vertex) in vertices.into_iter().enumerate() {
            if !graph.add_vertex(vertex) {
                return Err(GraphError::invalid_value(
                    "vertex list (duplicate at position)",
                    position,
                ));
            }
        }
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.cost.value())?;
        }
        Ok(graph)
    }
}

impl WeightedGraph<usize> {
    /// Weighted graph whose vertices are the integers `0..vertex_count`
    pub fn with_vertex_count<J>(vertex_count: usize, edges: J) -> Result<Self>
    where
        J: IntoIterator<Item = WeightedEdge>,
    {
        let mut graph = WeightedGraph::with_integer_vertices(vertex_count);
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.cost.value())?;
        }
        Ok(graph)
    }
}

impl<V> WeightedGraph<V> {
    /// Add the directed edge `u -> v` with the given cost.
    ///
    /// Endpoints are checked before the cost. The first edge for a pair wins;
    /// a later edge for the same pair is ignored whatever its cost.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex, cost: f64) -> Result<bool> {
        self.check_endpoints(u, v)?;
        if !Cost::new(cost).is_valid() {
            return Err(GraphError::InvalidCost {
                from: u,
                to: v,
                cost,
            });
        }
        self.insert_edge(WeightedEdge::new(u, v, cost))
    }

    /// Cost of the edge `from -> to`, if present
    pub fn edge_cost(&self, from: VertexIndex, to: VertexIndex) -> Option<Cost> {
        self.edges(from)
            .ok()?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.cost)
    }
}
