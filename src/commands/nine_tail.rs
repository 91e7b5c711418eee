//! Nine-tail command: cheapest flip sequence to the goal board

use graphkit_core::error::Result;
use graphkit_core::nine_tail::{Board, NineTail};
use tracing::debug;

use crate::cli::format::print_json;
use crate::cli::NineTailArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

/// Execute the nine-tail command
pub fn execute(ctx: &CommandContext, args: &NineTailArgs) -> Result<()> {
    let goal: Board = ctx.config.nine_tail.goal.parse()?;
    let model = NineTail::new(goal)?;
    let solution = model.solve()?;

    debug!(elapsed = ?ctx.start.elapsed(), solvable = solution.solvable_boards(), "solve");

    let flips = solution.flips(&args.state)?;
    let path = solution.shortest_path(&args.state)?;

    output_by_format!(ctx.cli.format,
        json => {
            let boards: Vec<String> = path.iter().map(Board::to_string).collect();
            print_json(&serde_json::json!({
                "start": args.state.to_string(),
                "goal": goal.to_string(),
                "flips": flips.value(),
                "moves": path.len().saturating_sub(1),
                "path": boards,
            }))?
        },
        human => {
            for (step, board) in path.iter().enumerate() {
                if step > 0 {
                    println!();
                }
                println!("{}", board.to_grid());
            }
            println!();
            println!("Total flips: {}", flips);
        }
    );

    Ok(())
}
