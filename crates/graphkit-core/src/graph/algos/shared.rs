use crate::ensure_index;
use crate::error::Result;
use crate::graph::search_tree::SearchTree;
use crate::graph::traversal::Adjacency;
use crate::graph::types::{Strategy, VertexIndex};

/// State tracked while building a search tree
pub struct SearchState {
    visited: Vec<bool>,
    parent: Vec<Option<VertexIndex>>,
    order: Vec<VertexIndex>,
}

impl SearchState {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            parent: vec![None; vertex_count],
            order: Vec::new(),
        }
    }

    pub fn is_visited(&self, index: VertexIndex) -> bool {
        self.visited[index]
    }

    pub fn mark_visited(&mut self, index: VertexIndex) {
        self.visited[index] = true;
    }

    pub fn set_parent(&mut self, child: VertexIndex, parent: VertexIndex) {
        self.parent[child] = Some(parent);
    }

    /// Append to the discovery order
    pub fn record(&mut self, index: VertexIndex) {
        self.order.push(index);
    }

    pub fn found(&self) -> usize {
        self.order.len()
    }

    pub fn into_tree<G: Adjacency>(
        self,
        graph: &G,
        root: VertexIndex,
        strategy: Strategy,
    ) -> SearchTree<'_, G::Vertex> {
        SearchTree::new(root, self.parent, self.order, strategy, graph.vertex_slice())
    }
}

/// Reject a start vertex outside the graph
pub fn check_start<G: Adjacency>(graph: &G, start: VertexIndex) -> Result<()> {
    ensure_index!(start, graph.vertex_count());
    Ok(())
}

/// Reject an edge target outside the graph
pub fn check_target<G: Adjacency>(graph: &G, target: VertexIndex) -> Result<()> {
    ensure_index!(target, graph.vertex_count());
    Ok(())
}
