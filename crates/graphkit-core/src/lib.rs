//! Graphkit Core Library
//!
//! Index-stable adjacency-list graphs, DFS/BFS search trees and weighted
//! shortest-path trees, plus the two applications built on them: circle
//! overlap connectivity and the weighted nine-tail puzzle.

pub mod config;
pub mod connectivity;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod nine_tail;
