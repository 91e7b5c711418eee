//! Shortest command: minimum-cost tree over a weighted graph document

use graphkit_core::document::GraphDocument;
use graphkit_core::error::Result;
use graphkit_core::graph::{ShortestPathTree, VertexIndex};
use tracing::debug;

use crate::cli::format::print_json;
use crate::cli::ShortestArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

/// Execute the shortest command
pub fn execute(ctx: &CommandContext, args: &ShortestArgs) -> Result<()> {
    let document = GraphDocument::load(&args.graph)?;
    let graph = document.build_weighted(ctx.config.weighted.default_cost)?;

    let source = args.source.unwrap_or(ctx.config.traversal.start);
    let tree = graph.shortest_path_tree(source)?;

    let path = match args.path_to {
        Some(target) => Some(tree.path(target)?),
        None => None,
    };

    debug!(elapsed = ?ctx.start.elapsed(), settled = tree.number_of_vertices_found(), "shortest");

    output_by_format!(ctx.cli.format,
        json => { print_json(&tree_json(&tree, args.path_to, path.as_deref()))? },
        human => { output_human(ctx, &tree, args.path_to, path.as_deref()); }
    );

    Ok(())
}

fn tree_json(
    tree: &ShortestPathTree<'_, String>,
    path_to: Option<VertexIndex>,
    path: Option<&[&String]>,
) -> serde_json::Value {
    let n = tree.vertex_count();
    let parents: Vec<Option<VertexIndex>> = (0..n).map(|i| tree.parent(i)).collect();
    let costs: Vec<Option<f64>> = (0..n).map(|i| tree.cost(i).map(|c| c.value())).collect();

    let mut json = serde_json::json!({
        "strategy": tree.strategy(),
        "source": tree.root(),
        "order": tree.search_order(),
        "found": tree.number_of_vertices_found(),
        "vertex_count": n,
        "parents": parents,
        "costs": costs,
    });

    if let (Some(target), Some(path)) = (path_to, path) {
        if let Some(obj) = json.as_object_mut() {
            obj.insert(
                "path".to_string(),
                serde_json::json!({
                    "to": target,
                    "cost": tree.cost(target).map(|c| c.value()),
                    "vertices": path,
                }),
            );
        }
    }

    json
}

fn output_human(
    ctx: &CommandContext,
    tree: &ShortestPathTree<'_, String>,
    path_to: Option<VertexIndex>,
    path: Option<&[&String]>,
) {
    println!("{}", tree.search_tree());

    for index in 0..tree.vertex_count() {
        let name = tree.vertex(index).map(String::as_str).unwrap_or_default();
        match tree.cost(index) {
            Some(cost) => println!("{} ({}): cost {}", name, index, cost),
            None => println!("{} ({}): unreached", name, index),
        }
    }

    if let (Some(target), Some(path)) = (path_to, path) {
        let names: Vec<&str> = path.iter().map(|v| v.as_str()).collect();
        let cost = tree.cost(target).unwrap_or_default();
        println!("Path to {} (cost {}): {}", target, cost, names.join(" -> "));
    }

    if !ctx.cli.quiet {
        println!(
            "Settled {} of {} vertices",
            tree.number_of_vertices_found(),
            tree.vertex_count()
        );
    }
}
