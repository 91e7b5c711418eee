use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{check_start, check_target, SearchState};
use crate::graph::algos::Traversal;
use crate::graph::search_tree::SearchTree;
use crate::graph::traversal::Adjacency;
use crate::graph::types::{EdgeEndpoints, Strategy, VertexIndex};

/// Pre-order depth-first search.
///
/// Runs on an explicit stack of `(vertex, next edge position)` frames. A
/// frame resumes at the edge after the one it descended through, so siblings
/// are visited in edge insertion order exactly as the recursive formulation
/// would visit them, and parent assignment matches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Traversal for DepthFirst {
    fn strategy(&self) -> Strategy {
        Strategy::Dfs
    }

    #[tracing::instrument(skip(self, graph), fields(vertices = graph.vertex_count()))]
    fn search<'g, G: Adjacency>(
        &self,
        graph: &'g G,
        start: VertexIndex,
    ) -> Result<SearchTree<'g, G::Vertex>> {
        check_start(graph, start)?;

        let mut state = SearchState::new(graph.vertex_count());
        let mut stack: Vec<(VertexIndex, usize)> = vec![(start, 0)];
        state.mark_visited(start);
        state.record(start);

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let edges = graph.out_edges(current);

            let Some(edge) = edges.get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let next = edge.target();
            check_target(graph, next)?;
            if !state.is_visited(next) {
                state.set_parent(next, current);
                state.mark_visited(next);
                state.record(next);
                stack.push((next, 0));
            }
        }

        debug!(found = state.found(), "dfs complete");
        Ok(state.into_tree(graph, start, Strategy::Dfs))
    }
}
