//! Adjacency-list graphs and their search trees
//!
//! Provides the graph model and the searches over it:
//! - Index-stable vertex storage with duplicate suppression
//! - DFS and BFS traversals producing search trees
//! - Dijkstra shortest-path trees over weighted edges
//! - Adjacency trait so traversals work on any graph variant

pub mod adjacency;
pub mod algos;
pub mod search_tree;
pub mod store;
pub mod traversal;
pub mod types;
pub mod unweighted;
pub mod weighted;

pub use adjacency::AdjacencyGraph;
pub use algos::{traverse, BreadthFirst, DepthFirst, ShortestPathTree, Traversal};
pub use search_tree::SearchTree;
pub use traversal::Adjacency;
pub use types::{Cost, Edge, EdgeEndpoints, Strategy, VertexIndex, WeightedEdge};
pub use unweighted::Graph;
pub use weighted::WeightedGraph;
