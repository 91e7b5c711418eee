//! Weighted nine-tail puzzle
//!
//! Nine coins sit on a 3x3 grid, each showing heads or tails. A move picks a
//! coin showing heads and flips it together with its orthogonal neighbours.
//! The cost of a move is the number of coins it turns over, so the cheapest
//! way to the goal minimizes total coin flips rather than move count.
//!
//! All 512 boards are vertices of a weighted graph. Every legal move `u -> v`
//! is stored as the reversed edge `v -> u`, which lets a single shortest-path
//! tree rooted at the goal answer queries for every starting board.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Cost, ShortestPathTree, VertexIndex, WeightedEdge, WeightedGraph};

/// Coins per side of the grid
pub const SIDE: usize = 3;
/// Coins on the board
pub const CELLS: usize = SIDE * SIDE;
/// Distinct boards
pub const NUMBER_OF_BOARDS: usize = 1 << CELLS;

/// Number of positions at which two equal-length sequences differ
pub fn hamming_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(GraphError::invalid_value(
            "hamming operands (lengths differ)",
            format!("{} vs {}", a.len(), b.len()),
        ));
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    pub fn flipped(self) -> Self {
        match self {
            Coin::Heads => Coin::Tails,
            Coin::Tails => Coin::Heads,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Coin::Heads => 'H',
            Coin::Tails => 'T',
        }
    }
}

/// A 3x3 board in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Coin; CELLS]);

impl Board {
    pub const ALL_TAILS: Board = Board([Coin::Tails; CELLS]);

    pub fn cells(&self) -> &[Coin; CELLS] {
        &self.0
    }

    /// Board number: tails is 1, heads is 0, first cell most significant
    pub fn index(&self) -> VertexIndex {
        self.0.iter().fold(0, |acc, coin| {
            (acc << 1)
                | match coin {
                    Coin::Tails => 1,
                    Coin::Heads => 0,
                }
        })
    }

    /// Inverse of [`Board::index`]; `None` past the last board
    pub fn from_index(index: VertexIndex) -> Option<Board> {
        if index >= NUMBER_OF_BOARDS {
            return None;
        }
        let mut cells = [Coin::Heads; CELLS];
        for (bit, cell) in cells.iter_mut().rev().enumerate() {
            if (index >> bit) & 1 == 1 {
                *cell = Coin::Tails;
            }
        }
        Some(Board(cells))
    }

    /// Flip `cell` and the cells directly above, below, left and right of it
    pub fn flipped_at(&self, cell: usize) -> Board {
        let mut cells = self.0;
        let (row, col) = (cell / SIDE, cell % SIDE);
        let mut flip = |r: usize, c: usize| {
            let i = r * SIDE + c;
            cells[i] = cells[i].flipped();
        };

        flip(row, col);
        if row > 0 {
            flip(row - 1, col);
        }
        if row + 1 < SIDE {
            flip(row + 1, col);
        }
        if col > 0 {
            flip(row, col - 1);
        }
        if col + 1 < SIDE {
            flip(row, col + 1);
        }
        Board(cells)
    }

    /// Boards reachable in one move, with the cell each move picks
    pub fn moves(&self) -> impl Iterator<Item = (usize, Board)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, coin)| **coin == Coin::Heads)
            .map(|(cell, _)| (cell, self.flipped_at(cell)))
    }

    /// Coins that differ between two boards
    pub fn flips_between(&self, other: &Board) -> usize {
        self.0.iter().zip(&other.0).filter(|(a, b)| a != b).count()
    }

    /// Three lines of three characters
    pub fn to_grid(&self) -> String {
        self.0
            .chunks(SIDE)
            .map(|row| row.iter().map(|c| c.as_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Board {
    type Err = GraphError;

    /// Nine `H`/`T` characters, case-insensitive; whitespace is ignored
    fn from_str(s: &str) -> Result<Self> {
        let coins: Vec<Coin> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'H' => Ok(Coin::Heads),
                'T' => Ok(Coin::Tails),
                _ => Err(GraphError::invalid_value("board (expected H or T)", s)),
            })
            .collect::<Result<_>>()?;

        let cells: [Coin; CELLS] = coins
            .try_into()
            .map_err(|_| GraphError::invalid_value("board (expected 9 coins)", s))?;
        Ok(Board(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coin in &self.0 {
            write!(f, "{}", coin.as_char())?;
        }
        Ok(())
    }
}

/// Graph of every board with one reversed, flip-weighted edge per move
#[derive(Debug, Clone)]
pub struct NineTail {
    graph: WeightedGraph<usize>,
    goal: Board,
}

impl NineTail {
    /// Model solving towards `goal`
    pub fn new(goal: Board) -> Result<Self> {
        let mut edges = Vec::new();
        for u in 0..NUMBER_OF_BOARDS {
            let Some(board) = Board::from_index(u) else {
                continue;
            };
            for (_, next) in board.moves() {
                let cost = hamming_distance(board.cells(), next.cells())?;
                edges.push(WeightedEdge::new(next.index(), u, cost as f64));
            }
        }
        let graph = WeightedGraph::with_vertex_count(NUMBER_OF_BOARDS, edges)?;
        debug!(edges = graph.edge_count(), goal = %goal, "built nine-tail graph");
        Ok(NineTail { graph, goal })
    }

    pub fn goal(&self) -> Board {
        self.goal
    }

    pub fn graph(&self) -> &WeightedGraph<usize> {
        &self.graph
    }

    /// Shortest-path tree rooted at the goal
    pub fn solve(&self) -> Result<NineTailSolution<'_>> {
        let tree = self.graph.shortest_path_tree(self.goal.index())?;
        Ok(NineTailSolution { tree })
    }
}

/// Costs and paths from every board to the goal
#[derive(Debug, Clone)]
pub struct NineTailSolution<'g> {
    tree: ShortestPathTree<'g, usize>,
}

impl NineTailSolution<'_> {
    /// Fewest coin flips that turn `board` into the goal
    pub fn flips(&self, board: &Board) -> Result<Cost> {
        let index = board.index();
        self.tree
            .cost(index)
            .ok_or(GraphError::Unreached { index })
    }

    /// Boards from `board` to the goal, both included
    pub fn shortest_path(&self, board: &Board) -> Result<Vec<Board>> {
        let mut path = self.tree.path_indices(board.index())?;
        path.reverse();
        Ok(path.into_iter().filter_map(Board::from_index).collect())
    }

    /// Number of boards from which the goal can be reached
    pub fn solvable_boards(&self) -> usize {
        self.tree.number_of_vertices_found()
    }
}
