//! Circle overlap connectivity
//!
//! Circles on a plane form an undirected graph: one vertex per circle, an edge
//! between every pair that overlaps. The set is connected when a depth-first
//! search from the first circle reaches all of them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexIndex};

/// Radius used when a circle is placed without one
pub const DEFAULT_RADIUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Circle { x, y, radius }
    }

    /// Circle of the default radius centred on a point
    pub fn at(x: f64, y: f64) -> Self {
        Circle::new(x, y, DEFAULT_RADIUS)
    }

    fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    /// Whether the point lies inside or on the boundary
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) <= self.radius
    }

    /// Whether the centre distance is at most the sum of the radii
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.distance_to(other.x, other.y) <= self.radius + other.radius
    }
}

/// Circles in placement order; circle `i` is vertex `i` of the overlap graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CircleSet {
    circles: Vec<Circle>,
}

impl CircleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `circle` unless its centre falls inside an existing circle
    pub fn add(&mut self, circle: Circle) -> bool {
        if self.circles.iter().any(|c| c.contains(circle.x, circle.y)) {
            debug!(x = circle.x, y = circle.y, "centre inside existing circle");
            return false;
        }
        self.circles.push(circle);
        true
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Undirected overlap graph over circle indices
    pub fn overlap_graph(&self) -> Result<Graph<usize>> {
        let n = self.circles.len();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.circles[i].overlaps(&self.circles[j]) {
                    edges.push(Edge::new(i, j));
                    edges.push(Edge::new(j, i));
                }
            }
        }
        Graph::with_vertex_count(n, edges)
    }

    /// Whether every circle is reachable from the first through overlaps.
    ///
    /// An empty set is connected.
    pub fn is_connected(&self) -> Result<bool> {
        if self.circles.is_empty() {
            return Ok(true);
        }
        let graph = self.overlap_graph()?;
        let tree = graph.dfs(0)?;
        Ok(tree.number_of_vertices_found() == self.circles.len())
    }

    /// Connected groups of circle indices, each in discovery order, ordered
    /// by their lowest index
    pub fn components(&self) -> Result<Vec<Vec<VertexIndex>>> {
        let graph = self.overlap_graph()?;
        let mut assigned = vec![false; graph.len()];
        let mut components = Vec::new();

        for start in 0..graph.len() {
            if assigned[start] {
                continue;
            }
            let tree = graph.dfs(start)?;
            let members = tree.search_order().to_vec();
            for &member in &members {
                assigned[member] = true;
            }
            components.push(members);
        }
        Ok(components)
    }
}

impl FromIterator<Circle> for CircleSet {
    /// Place circles in order with the same rule as [`CircleSet::add`]
    fn from_iter<I: IntoIterator<Item = Circle>>(iter: I) -> Self {
        let mut set = CircleSet::new();
        for circle in iter {
            set.add(circle);
        }
        set
    }
}
