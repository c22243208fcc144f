//! `tbx resolve` — Resolve the compose file for a task directory.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Task directory to resolve.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Resolution outcome for `--json` output.
#[derive(Serialize, Debug)]
struct Resolution {
    /// Absolute path of the winning compose file.
    path: PathBuf,
    /// Whether the file is a transient auto-generated one.
    auto_generated: bool,
}

/// Executes the `resolve` command.
///
/// # Errors
///
/// Returns an error if a compose file cannot be resolved or written.
pub fn execute(args: ResolveArgs) -> anyhow::Result<()> {
    let path = taskbox_compose::resolver::resolve_compose_file(&args.dir)?;
    let auto_generated = taskbox_compose::detect::is_auto_compose_file(&path);
    tracing::info!(path = %path.display(), auto_generated, "compose file resolved");

    if args.json {
        let resolution = Resolution {
            path,
            auto_generated,
        };
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
