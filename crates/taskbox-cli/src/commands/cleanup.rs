//! `tbx cleanup` — Remove the auto-generated compose file for a directory.

use std::path::PathBuf;

use clap::Args;

use taskbox_common::constants::AUTO_COMPOSE_FILE;

/// Arguments for the `cleanup` subcommand.
#[derive(Args, Debug)]
pub struct CleanupArgs {
    /// Task directory to clean up.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Executes the `cleanup` command.
///
/// # Errors
///
/// Never fails; removal is best-effort and the command exits successfully
/// whether or not a file was deleted.
pub fn execute(args: CleanupArgs) -> anyhow::Result<()> {
    let path = args.dir.join(AUTO_COMPOSE_FILE);
    taskbox_compose::resolver::cleanup_auto_compose_file(Some(&path));
    Ok(())
}
