use std::path::PathBuf;

use clap::Args;

use super::parse::{parse_board, parse_strategy};
use graphkit_core::graph::{Strategy, VertexIndex};
use graphkit_core::nine_tail::Board;

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Graph document (JSON)
    pub graph: PathBuf,

    /// Search strategy: dfs or bfs (default from config)
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Start vertex index (default from config)
    #[arg(long)]
    pub start: Option<VertexIndex>,

    /// Also print the tree path from the start to this vertex
    #[arg(long)]
    pub path_to: Option<VertexIndex>,
}

#[derive(Args, Debug, Clone)]
pub struct EdgesArgs {
    /// Graph document (JSON)
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ShortestArgs {
    /// Graph document (JSON); edges without a cost use the configured default
    pub graph: PathBuf,

    /// Source vertex index (default from config)
    #[arg(long)]
    pub source: Option<VertexIndex>,

    /// Also print the cheapest path from the source to this vertex
    #[arg(long)]
    pub path_to: Option<VertexIndex>,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectedArgs {
    /// Circle list (JSON array of {x, y, radius})
    pub circles: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct NineTailArgs {
    /// Starting board: nine H/T characters, row-major
    #[arg(value_parser = parse_board)]
    pub state: Board,
}
