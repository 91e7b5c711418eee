//! Command dispatch logic for graphkit

use std::time::Instant;

use graphkit_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::CommandContext;
use command::{load_config, Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
