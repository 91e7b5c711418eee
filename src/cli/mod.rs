//! CLI argument parsing for graphkit
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphkit_core::format::OutputFormat;

pub use args::{ConnectedArgs, EdgesArgs, NineTailArgs, ShortestArgs, TraverseArgs};
use parse::parse_output_format;

/// Graphkit - search trees, connectivity and weighted shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. debug, graphkit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ./graphkit.toml when present)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run DFS or BFS over a graph document and print the search tree
    Traverse(TraverseArgs),

    /// Print every vertex with its outgoing edges
    Edges(EdgesArgs),

    /// Compute the minimum-cost tree over a weighted graph document
    Shortest(ShortestArgs),

    /// Check whether a set of circles is connected through overlaps
    Connected(ConnectedArgs),

    /// Solve the weighted nine-tail puzzle for a starting board
    NineTail(NineTailArgs),
}
