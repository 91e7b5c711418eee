//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use graphkit_core::config::Config;
use graphkit_core::error::Result;

use crate::cli::Cli;

/// Load `--config`, or discover `graphkit.toml` in the working directory
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::discover(&cwd)
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Search trees, connectivity and weighted shortest paths over adjacency-list graphs.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}
