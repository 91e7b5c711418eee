//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Depth-first search tree
//! - `bfs`: Breadth-first search tree
//! - `dijkstra`: Minimum-cost shortest-path tree over weighted edges
//! - `shared`: Search state used by the unweighted traversals

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::ShortestPathTree;

use crate::error::{GraphError, Result};
use crate::graph::search_tree::SearchTree;
use crate::graph::traversal::Adjacency;
use crate::graph::types::{Strategy, VertexIndex};

/// A traversal that turns a start vertex into a search tree.
///
/// Implementations read the graph only; the same graph can be searched any
/// number of times.
pub trait Traversal {
    fn strategy(&self) -> Strategy;

    fn search<'g, G: Adjacency>(
        &self,
        graph: &'g G,
        start: VertexIndex,
    ) -> Result<SearchTree<'g, G::Vertex>>;
}

/// Run the unweighted traversal named by `strategy`
pub fn traverse<G: Adjacency>(
    graph: &G,
    start: VertexIndex,
    strategy: Strategy,
) -> Result<SearchTree<'_, G::Vertex>> {
    match strategy {
        Strategy::Dfs => DepthFirst.search(graph, start),
        Strategy::Bfs => BreadthFirst.search(graph, start),
        Strategy::Dijkstra => Err(GraphError::unsupported(
            "dijkstra as an unweighted traversal (use a weighted graph's shortest-path tree)",
        )),
    }
}
