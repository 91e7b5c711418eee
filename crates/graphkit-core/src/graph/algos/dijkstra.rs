use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::ops::Deref;

use tracing::{debug, trace};

use crate::ensure_index;
use crate::error::Result;
use crate::graph::search_tree::SearchTree;
use crate::graph::types::{Cost, Strategy, VertexIndex};
use crate::graph::weighted::WeightedGraph;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    index: VertexIndex,
    cost: Cost,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    /// Cheaper first, then lower index, so equal-cost vertices settle in
    /// ascending index order
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .value()
            .total_cmp(&other.cost.value())
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// A search tree whose parent links form minimum-cost paths from the source.
///
/// Dereferences to the underlying [`SearchTree`]; its discovery order is the
/// order in which vertices were settled.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g, V> {
    tree: SearchTree<'g, V>,
    costs: Vec<Option<Cost>>,
}

impl<'g, V> ShortestPathTree<'g, V> {
    /// Minimum total cost from the source to `index`; `None` if unreached
    pub fn cost(&self, index: VertexIndex) -> Option<Cost> {
        self.costs.get(index).copied().flatten()
    }

    pub fn search_tree(&self) -> &SearchTree<'g, V> {
        &self.tree
    }

    pub fn into_search_tree(self) -> SearchTree<'g, V> {
        self.tree
    }
}

impl<'g, V> Deref for ShortestPathTree<'g, V> {
    type Target = SearchTree<'g, V>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<V> WeightedGraph<V> {
    /// Minimum-cost search tree rooted at `source`.
    ///
    /// A vertex's parent only changes on a strictly cheaper path, so among
    /// equal-cost paths the first one found is kept.
    #[tracing::instrument(skip(self), fields(vertices = self.len()))]
    pub fn shortest_path_tree(&self, source: VertexIndex) -> Result<ShortestPathTree<'_, V>> {
        let n = self.len();
        ensure_index!(source, n);

        let mut costs: Vec<Option<Cost>> = vec![None; n];
        let mut parent: Vec<Option<VertexIndex>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut order = Vec::new();
        let mut heap = BinaryHeap::new();

        costs[source] = Some(Cost::ZERO);
        heap.push(Reverse(HeapEntry {
            index: source,
            cost: Cost::ZERO,
        }));

        while let Some(Reverse(HeapEntry { index, cost })) = heap.pop() {
            if settled[index] {
                continue;
            }
            settled[index] = true;
            order.push(index);
            trace!(index, cost = cost.value(), "settled");

            for edge in self.edges(index)? {
                if settled[edge.to] {
                    continue;
                }
                let candidate = cost + edge.cost; // saturates at f64::MAX
                let improves = match costs[edge.to] {
                    Some(known) => candidate.value() < known.value(),
                    None => true,
                };
                if improves {
                    costs[edge.to] = Some(candidate);
                    parent[edge.to] = Some(index);
                    heap.push(Reverse(HeapEntry {
                        index: edge.to,
                        cost: candidate,
                    }));
                }
            }
        }

        debug!(settled = order.len(), "dijkstra complete");
        let tree = SearchTree::new(source, parent, order, Strategy::Dijkstra, self.vertices());
        Ok(ShortestPathTree { tree, costs })
    }
}
