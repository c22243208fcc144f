//! # tbx — taskbox CLI
//!
//! Prepares the compose configuration a task sandbox launches with:
//! resolve, inspect, and clean up per-directory compose files.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
