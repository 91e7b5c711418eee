//! Traverse command: DFS/BFS search tree over a graph document

use graphkit_core::document::GraphDocument;
use graphkit_core::error::Result;
use graphkit_core::graph::{traverse, SearchTree, VertexIndex};
use tracing::debug;

use crate::cli::format::print_json;
use crate::cli::TraverseArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

/// Execute the traverse command
pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let document = GraphDocument::load(&args.graph)?;
    let graph = document.build_graph()?;

    debug!(elapsed = ?ctx.start.elapsed(), vertices = graph.len(), "build_graph");

    let strategy = args.strategy.unwrap_or(ctx.config.traversal.strategy);
    let start = args.start.unwrap_or(ctx.config.traversal.start);
    let tree = traverse(&graph, start, strategy)?;

    let path = match args.path_to {
        Some(target) => Some(tree.path(target)?),
        None => None,
    };

    debug!(elapsed = ?ctx.start.elapsed(), found = tree.number_of_vertices_found(), "traverse");

    output_by_format!(ctx.cli.format,
        json => { print_json(&tree_json(&tree, args.path_to, path.as_deref()))? },
        human => { output_human(ctx, &tree, args.path_to, path.as_deref()); }
    );

    Ok(())
}

fn tree_json(
    tree: &SearchTree<'_, String>,
    path_to: Option<VertexIndex>,
    path: Option<&[&String]>,
) -> serde_json::Value {
    let parents: Vec<Option<VertexIndex>> = (0..tree.vertex_count()).map(|i| tree.parent(i)).collect();
    let mut json = serde_json::json!({
        "strategy": tree.strategy(),
        "root": tree.root(),
        "order": tree.search_order(),
        "found": tree.number_of_vertices_found(),
        "vertex_count": tree.vertex_count(),
        "parents": parents,
    });

    if let (Some(target), Some(path)) = (path_to, path) {
        if let Some(obj) = json.as_object_mut() {
            obj.insert(
                "path".to_string(),
                serde_json::json!({ "to": target, "vertices": path }),
            );
        }
    }

    json
}

fn output_human(
    ctx: &CommandContext,
    tree: &SearchTree<'_, String>,
    path_to: Option<VertexIndex>,
    path: Option<&[&String]>,
) {
    println!("{}", tree);

    let order: Vec<&str> = tree
        .search_order()
        .iter()
        .filter_map(|&i| tree.vertex(i).map(String::as_str))
        .collect();
    println!("Search order: {}", order.join(" "));

    if let (Some(target), Some(path)) = (path_to, path) {
        let names: Vec<&str> = path.iter().map(|v| v.as_str()).collect();
        println!("Path to {}: {}", target, names.join(" -> "));
    }

    if !ctx.cli.quiet {
        println!(
            "Found {} of {} vertices ({})",
            tree.number_of_vertices_found(),
            tree.vertex_count(),
            tree.strategy()
        );
    }
}
