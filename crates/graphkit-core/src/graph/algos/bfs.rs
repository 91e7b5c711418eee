use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{check_start, check_target, SearchState};
use crate::graph::algos::Traversal;
use crate::graph::search_tree::SearchTree;
use crate::graph::traversal::Adjacency;
use crate::graph::types::{EdgeEndpoints, Strategy, VertexIndex};

/// FIFO breadth-first search.
///
/// Vertices are marked when enqueued and recorded when dequeued, so the
/// discovery order is non-decreasing in edge distance from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Traversal for BreadthFirst {
    fn strategy(&self) -> Strategy {
        Strategy::Bfs
    }

    #[tracing::instrument(skip(self, graph), fields(vertices = graph.vertex_count()))]
    fn search<'g, G: Adjacency>(
        &self,
        graph: &'g G,
        start: VertexIndex,
    ) -> Result<SearchTree<'g, G::Vertex>> {
        check_start(graph, start)?;

        let mut state = SearchState::new(graph.vertex_count());
        let mut queue: VecDeque<VertexIndex> = VecDeque::new();
        queue.push_back(start);
        state.mark_visited(start);

        while let Some(current) = queue.pop_front() {
            state.record(current);
            for edge in graph.out_edges(current) {
                let next = edge.target();
                check_target(graph, next)?;
                if !state.is_visited(next) {
                    queue.push_back(next);
                    state.set_parent(next, current);
                    state.mark_visited(next);
                }
            }
        }

        debug!(found = state.found(), "bfs complete");
        Ok(state.into_tree(graph, start, Strategy::Bfs))
    }
}
