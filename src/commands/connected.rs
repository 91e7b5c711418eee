//! Connected command: circle overlap connectivity

use std::fs;

use graphkit_core::connectivity::{Circle, CircleSet};
use graphkit_core::error::Result;
use tracing::debug;

use crate::cli::format::print_json;
use crate::cli::ConnectedArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

/// Execute the connected command
pub fn execute(ctx: &CommandContext, args: &ConnectedArgs) -> Result<()> {
    let content = fs::read_to_string(&args.circles)?;
    let placed: Vec<Circle> = serde_json::from_str(&content)?;
    let requested = placed.len();

    let set: CircleSet = placed.into_iter().collect();
    let ignored = requested - set.len();
    let connected = set.is_connected()?;
    let components = set.components()?;

    debug!(elapsed = ?ctx.start.elapsed(), circles = set.len(), ignored, "connected");

    output_by_format!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "circles": set.len(),
                "ignored": ignored,
                "connected": connected,
                "components": components,
            }))?
        },
        human => {
            println!("Connected: {}", if connected { "yes" } else { "no" });
            println!("Components: {}", components.len());
            if !ctx.cli.quiet {
                println!("Circles: {} ({} ignored)", set.len(), ignored);
            }
        }
    );

    Ok(())
}
