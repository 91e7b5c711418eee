//! Search trees produced by one traversal call

use std::fmt;

use crate::ensure_index;
use crate::error::{GraphError, Result};
use crate::graph::types::{Strategy, VertexIndex};

/// Parent pointers plus discovery order, rooted at the traversal start.
///
/// A tree borrows the vertex values of the graph it was computed from, so the
/// graph cannot be mutated while the tree is alive.
#[derive(Debug, Clone)]
pub struct SearchTree<'g, V> {
    root: VertexIndex,
    parent: Vec<Option<VertexIndex>>,
    order: Vec<VertexIndex>,
    strategy: Strategy,
    vertices: &'g [V],
}

impl<'g, V> SearchTree<'g, V> {
    pub(crate) fn new(
        root: VertexIndex,
        parent: Vec<Option<VertexIndex>>,
        order: Vec<VertexIndex>,
        strategy: Strategy,
        vertices: &'g [V],
    ) -> Self {
        debug_assert_eq!(parent.len(), vertices.len());
        debug_assert!(parent[root].is_none());
        Self {
            root,
            parent,
            order,
            strategy,
            vertices,
        }
    }

    pub fn root(&self) -> VertexIndex {
        self.root
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Parent of `index`; `None` for the root, unreached or out-of-range indices
    pub fn parent(&self, index: VertexIndex) -> Option<VertexIndex> {
        self.parent.get(index).copied().flatten()
    }

    /// Indices in the order the traversal first visited them
    pub fn search_order(&self) -> &[VertexIndex] {
        &self.order
    }

    /// Number of vertices reachable from the root
    pub fn number_of_vertices_found(&self) -> usize {
        self.order.len()
    }

    /// Number of vertices in the graph the tree was computed from
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_reached(&self, index: VertexIndex) -> bool {
        index == self.root || self.parent(index).is_some()
    }

    /// Whether every vertex of the graph was reached
    pub fn spans_graph(&self) -> bool {
        self.number_of_vertices_found() == self.vertices.len()
    }

    /// Tree edges `(parent, child)`, ordered by child index
    pub fn tree_edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
    }

    /// Indices on the path from the root to `index`, root first
    pub fn path_indices(&self, index: VertexIndex) -> Result<Vec<VertexIndex>> {
        ensure_index!(index, self.vertices.len());
        if !self.is_reached(index) {
            return Err(GraphError::Unreached { index });
        }

        let mut path = vec![index];
        let mut current = index;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Vertices on the path from the root to `index`, root first
    pub fn path(&self, index: VertexIndex) -> Result<Vec<&'g V>> {
        let vertices = self.vertices;
        Ok(self
            .path_indices(index)?
            .into_iter()
            .map(|i| &vertices[i])
            .collect())
    }

    /// Value of the vertex at `index` in the searched graph
    pub fn vertex(&self, index: VertexIndex) -> Option<&'g V> {
        self.vertices.get(index)
    }

    pub fn root_vertex(&self) -> &'g V {
        &self.vertices[self.root]
    }
}

/// Diagnostic dump: the root, then every tree edge
impl<V: fmt::Display> fmt::Display for SearchTree<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root is: {}", self.root_vertex())?;
        write!(f, "Edges:")?;
        for (parent, child) in self.tree_edges() {
            write!(f, " ({}, {})", self.vertices[parent], self.vertices[child])?;
        }
        Ok(())
    }
}
