//! CLI command definitions and dispatch.

pub mod cleanup;
pub mod resolve;
pub mod status;

use clap::{Parser, Subcommand};

/// taskbox — compose configuration for task sandbox directories.
#[derive(Parser, Debug)]
#[command(name = taskbox_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the compose file a task directory should launch with.
    Resolve(resolve::ResolveArgs),
    /// Show the compose configuration a directory currently carries.
    Status(status::StatusArgs),
    /// Remove the auto-generated compose file, if present.
    Cleanup(cleanup::CleanupArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Resolve(args) => resolve::execute(args),
        Command::Status(args) => status::execute(args),
        Command::Cleanup(args) => cleanup::execute(args),
    }
}
