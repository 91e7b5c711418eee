//! Edges command: adjacency dump of a graph document

use graphkit_core::document::GraphDocument;
use graphkit_core::error::Result;
use graphkit_core::graph::Graph;

use crate::cli::format::print_json;
use crate::cli::EdgesArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

/// Execute the edges command
pub fn execute(ctx: &CommandContext, args: &EdgesArgs) -> Result<()> {
    let graph = GraphDocument::load(&args.graph)?.build_graph()?;

    output_by_format!(ctx.cli.format,
        json => { print_json(&adjacency_json(&graph)?)? },
        human => { print!("{}", graph); }
    );

    Ok(())
}

fn adjacency_json(graph: &Graph<String>) -> Result<serde_json::Value> {
    let mut vertices = Vec::with_capacity(graph.len());
    for (index, vertex) in graph.vertices().iter().enumerate() {
        vertices.push(serde_json::json!({
            "index": index,
            "vertex": vertex,
            "degree": graph.degree(index)?,
            "neighbors": graph.neighbors(index)?,
        }));
    }

    Ok(serde_json::json!({
        "vertices": vertices,
        "edge_count": graph.edge_count(),
    }))
}
