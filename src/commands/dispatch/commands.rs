//! Command implementations for all graphkit commands

use graphkit_core::error::Result;

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Traverse(args) => commands::traverse::execute(ctx, args),
            Commands::Edges(args) => commands::edges::execute(ctx, args),
            Commands::Shortest(args) => commands::shortest::execute(ctx, args),
            Commands::Connected(args) => commands::connected::execute(ctx, args),
            Commands::NineTail(args) => commands::nine_tail::execute(ctx, args),
        }
    }
}
