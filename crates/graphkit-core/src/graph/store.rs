//! Vertex storage and per-vertex adjacency lists
//!
//! Both structures are append-only in their index space: a vertex keeps the
//! position it was given at insertion for the lifetime of the graph (until
//! `clear`), and every vertex owns exactly one outgoing-edge list at the same
//! position.

use crate::graph::types::{EdgeEndpoints, VertexIndex};

/// Ordered collection of vertex values, position = index
#[derive(Debug, Clone)]
pub struct VertexStore<V> {
    vertices: Vec<V>,
}

impl<V> Default for VertexStore<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<V: PartialEq> VertexStore<V> {
    /// Append `vertex` unless an equal value is already stored.
    ///
    /// Returns the new index, or `None` for a duplicate. The duplicate check
    /// is a linear scan so vertex types only need `PartialEq`.
    pub fn insert(&mut self, vertex: V) -> Option<VertexIndex> {
        if self.contains(&vertex) {
            return None;
        }
        self.vertices.push(vertex);
        Some(self.vertices.len() - 1)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Index of the first stored value equal to `vertex` (O(n))
    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.vertices.iter().position(|v| v == vertex)
    }
}

impl<V> VertexStore<V> {
    /// Append without the duplicate scan; the caller knows `vertex` is new
    pub fn push_distinct(&mut self, vertex: V) -> VertexIndex {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn get(&self, index: VertexIndex) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

/// Per-vertex ordered outgoing edges
#[derive(Debug, Clone)]
pub struct AdjacencyList<E> {
    lists: Vec<Vec<E>>,
}

impl<E> Default for AdjacencyList<E> {
    fn default() -> Self {
        Self { lists: Vec::new() }
    }
}

impl<E: EdgeEndpoints> AdjacencyList<E> {
    /// Allocate an empty edge list for a newly inserted vertex
    pub fn push_vertex(&mut self) {
        self.lists.push(Vec::new());
    }

    /// Edges leaving `index`, in insertion order
    pub fn edges(&self, index: VertexIndex) -> Option<&[E]> {
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Whether `edge.source()` already has an edge to `edge.target()`
    pub fn contains(&self, edge: &E) -> bool {
        self.lists
            .get(edge.source())
            .is_some_and(|list| list.iter().any(|e| e.same_endpoints(edge)))
    }

    /// Append `edge` to its source's list unless the pair is already present.
    ///
    /// The caller guarantees the source index has a list.
    pub fn insert(&mut self, edge: E) -> bool {
        if self.contains(&edge) {
            return false;
        }
        match self.lists.get_mut(edge.source()) {
            Some(list) => {
                list.push(edge);
                true
            }
            None => false,
        }
    }

    /// Remove the edge `from -> to`, keeping the order of the remaining edges
    pub fn remove(&mut self, from: VertexIndex, to: VertexIndex) -> bool {
        let Some(list) = self.lists.get_mut(from) else {
            return false;
        };
        match list.iter().position(|e| e.target() == to) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn degree(&self, index: VertexIndex) -> Option<usize> {
        self.lists.get(index).map(Vec::len)
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }
}
