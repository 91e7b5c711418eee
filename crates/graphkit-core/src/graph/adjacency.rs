//! Adjacency-list graph shared by the unweighted and weighted variants
//!
//! `AdjacencyGraph` is generic over the edge record it stores. The unweighted
//! graph stores plain [`Edge`](crate::graph::Edge)s and the weighted graph
//! stores [`WeightedEdge`](crate::graph::WeightedEdge)s; both get the same
//! vertex store, the same duplicate suppression and the same endpoint
//! validation from this module.

use std::fmt;

use tracing::debug;

use crate::ensure_index;
use crate::error::{GraphError, Result};
use crate::graph::store::{AdjacencyList, VertexStore};
use crate::graph::types::{EdgeEndpoints, VertexIndex};

/// Vertex values plus one ordered outgoing-edge list per vertex
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    vertices: VertexStore<V>,
    adjacency: AdjacencyList<E>,
}

impl<V, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: VertexStore::default(),
            adjacency: AdjacencyList::default(),
        }
    }
}

impl<V: PartialEq, E: EdgeEndpoints> AdjacencyGraph<V, E> {
    /// Add a vertex, assigning it the next index.
    ///
    /// Returns `false` without effect if an equal vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.vertices.insert(vertex) {
            Some(_) => {
                self.adjacency.push_vertex();
                true
            }
            None => {
                debug!("duplicate vertex ignored");
                false
            }
        }
    }

    /// Index of `vertex`, by linear search
    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.vertices.index_of(vertex)
    }

    /// Always fails with `Unsupported`: indices are never reassigned or vacated.
    pub fn remove_vertex(&mut self, _vertex: &V) -> Result<bool> {
        Err(GraphError::unsupported(
            "remove vertex (vertex indices are never reassigned)",
        ))
    }
}

impl<E: EdgeEndpoints> AdjacencyGraph<usize, E> {
    /// Graph with vertices `0..vertex_count` and no edges
    pub(crate) fn with_integer_vertices(vertex_count: usize) -> Self {
        let mut graph = Self::default();
        for vertex in 0..vertex_count {
            graph.vertices.push_distinct(vertex);
            graph.adjacency.push_vertex();
        }
        graph
    }
}

impl<V, E: EdgeEndpoints> AdjacencyGraph<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&V> {
        self.vertices.get(index)
    }

    /// All vertices in index order
    pub fn vertices(&self) -> &[V] {
        self.vertices.as_slice()
    }

    /// Outgoing edges of `index`, in insertion order
    pub fn edges(&self, index: VertexIndex) -> Result<&[E]> {
        self.adjacency
            .edges(index)
            .ok_or_else(|| GraphError::invalid_index(index, self.len()))
    }

    /// Targets reachable directly from `index`, in insertion order
    pub fn neighbors(&self, index: VertexIndex) -> Result<Vec<VertexIndex>> {
        Ok(self.edges(index)?.iter().map(|e| e.target()).collect())
    }

    /// Number of outgoing edges of `index`
    pub fn degree(&self, index: VertexIndex) -> Result<usize> {
        self.adjacency
            .degree(index)
            .ok_or_else(|| GraphError::invalid_index(index, self.len()))
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Whether the edge `from -> to` is present
    pub fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> bool {
        self.adjacency
            .edges(from)
            .is_some_and(|edges| edges.iter().any(|e| e.target() == to))
    }

    /// Validate both endpoints, then append the edge unless its pair exists.
    ///
    /// The graph is untouched when an endpoint is out of range.
    pub(crate) fn insert_edge(&mut self, edge: E) -> Result<bool> {
        self.check_endpoints(edge.source(), edge.target())?;
        if self.adjacency.insert(edge) {
            Ok(true)
        } else {
            debug!("duplicate edge ignored");
            Ok(false)
        }
    }

    /// Check that both endpoints are in `[0, len)`
    pub(crate) fn check_endpoints(&self, from: VertexIndex, to: VertexIndex) -> Result<()> {
        let size = self.len();
        ensure_index!(from, size);
        ensure_index!(to, size);
        Ok(())
    }

    /// Remove the edge `from -> to`.
    ///
    /// Returns whether the graph changed. Vertex indices are unaffected.
    pub fn remove_edge(&mut self, from: VertexIndex, to: VertexIndex) -> Result<bool> {
        self.check_endpoints(from, to)?;
        Ok(self.adjacency.remove(from, to))
    }

    /// Drop all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

/// Diagnostic dump of every adjacency list, one vertex per line
impl<V: fmt::Display, E: EdgeEndpoints> fmt::Display for AdjacencyGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.vertices();
        for (index, vertex) in vertices.iter().enumerate() {
            write!(f, "{} ({}):", vertex, index)?;
            for edge in self.adjacency.edges(index).unwrap_or(&[]) {
                write!(
                    f,
                    " ({}, {})",
                    vertices[edge.source()],
                    vertices[edge.target()]
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
