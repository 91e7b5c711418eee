use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::algos::{BreadthFirst, DepthFirst, Traversal};
use crate::graph::search_tree::SearchTree;
use crate::graph::types::{Edge, EdgeEndpoints, VertexIndex};

/// Directed graph with unweighted edges
pub type Graph<V> = AdjacencyGraph<V, Edge>;

impl<V: PartialEq> Graph<V> {
    /// Build a graph from a vertex list and an edge list.
    ///
    /// Vertex `i` of `vertices` gets index `i`, so a repeated vertex value is
    /// rejected rather than silently shifting every later index.
    pub fn from_parts<I, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = Edge>,
    {
        let mut graph = Graph::new();
        for (position, vertex) in vertices.into_iter().enumerate() {
            if !graph.add_vertex(vertex) {
                return Err(GraphError::invalid_value(
                    "vertex list (duplicate at position)",
                    position,
                ));
            }
        }
        for edge in edges {
            graph.add_edge(edge.from, edge.to)?;
        }
        Ok(graph)
    }
}

impl Graph<usize> {
    /// Graph whose vertices are the integers `0..vertex_count`
    pub fn with_vertex_count<J>(vertex_count: usize, edges: J) -> Result<Self>
    where
        J: IntoIterator<Item = Edge>,
    {
        let mut graph = Graph::with_integer_vertices(vertex_count);
        for edge in edges {
            graph.add_edge(edge.from, edge.to)?;
        }
        Ok(graph)
    }
}

impl<V> Graph<V> {
    /// Add the directed edge `u -> v`.
    ///
    /// Fails with `InvalidIndex` if either endpoint is outside `[0, len)`;
    /// returns `false` if the edge already exists.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex) -> Result<bool> {
        self.insert_edge(Edge::new(u, v))
    }

    /// Add both `u -> v` and `v -> u`; returns whether either was new
    pub fn add_undirected_edge(&mut self, u: VertexIndex, v: VertexIndex) -> Result<bool> {
        self.check_endpoints(u, v)?;
        let forward = self.insert_edge(Edge::new(u, v))?;
        let backward = self.insert_edge(Edge::new(v, u))?;
        Ok(forward || backward)
    }
}

impl<V, E: EdgeEndpoints> AdjacencyGraph<V, E> {
    /// Depth-first search tree rooted at `start`
    pub fn dfs(&self, start: VertexIndex) -> Result<SearchTree<'_, V>> {
        DepthFirst.search(self, start)
    }

    /// Breadth-first search tree rooted at `start`
    pub fn bfs(&self, start: VertexIndex) -> Result<SearchTree<'_, V>> {
        BreadthFirst.search(self, start)
    }
}
