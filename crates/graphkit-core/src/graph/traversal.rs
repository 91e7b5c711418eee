use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::types::{EdgeEndpoints, VertexIndex};

/// Trait for providing vertices and outgoing edges to the traversals.
///
/// Every edge target returned by `out_edges` must be below `vertex_count`;
/// the traversals fail with `InvalidIndex` on a target that is not.
pub trait Adjacency {
    type Vertex;
    type Edge: EdgeEndpoints;

    fn vertex_slice(&self) -> &[Self::Vertex];

    /// Outgoing edges of `index` in insertion order (empty when out of range)
    fn out_edges(&self, index: VertexIndex) -> &[Self::Edge];

    fn vertex_count(&self) -> usize {
        self.vertex_slice().len()
    }
}

impl<V, E: EdgeEndpoints> Adjacency for AdjacencyGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn vertex_slice(&self) -> &[V] {
        self.vertices()
    }

    fn out_edges(&self, index: VertexIndex) -> &[E] {
        self.edges(index).unwrap_or(&[])
    }
}
