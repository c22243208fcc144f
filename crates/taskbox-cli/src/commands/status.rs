//! `tbx status` — Show the compose configuration a directory carries.
//!
//! Read-only: reports what `resolve` would do without writing anything.

use std::path::PathBuf;

use clap::Args;

use taskbox_compose::detect;

/// Arguments for the `status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Task directory to inspect.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Executes the `status` command.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn execute(args: StatusArgs) -> anyhow::Result<()> {
    let dir = &args.dir;
    let compose = detect::find_compose_file(dir);
    let dockerfile = detect::has_dockerfile(dir);
    let auto = detect::has_auto_compose_file(dir);

    println!("compose file:   {}", compose.unwrap_or("(none)"));
    println!("Dockerfile:     {}", present(dockerfile));
    println!("auto-generated: {}", present(auto));
    println!("resolution:     {}", outcome(compose, auto, dockerfile));
    Ok(())
}

const fn present(found: bool) -> &'static str {
    if found { "present" } else { "absent" }
}

/// Describes what a `resolve` run against the directory would do.
fn outcome(compose: Option<&'static str>, auto: bool, dockerfile: bool) -> String {
    if let Some(name) = compose {
        format!("use {name}")
    } else if auto {
        format!("reuse {}", taskbox_common::constants::AUTO_COMPOSE_FILE)
    } else if dockerfile {
        format!(
            "synthesize {} from Dockerfile",
            taskbox_common::constants::AUTO_COMPOSE_FILE
        )
    } else {
        format!(
            "synthesize generic {}",
            taskbox_common::constants::AUTO_COMPOSE_FILE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_prefers_user_compose_file() {
        assert_eq!(outcome(Some("compose.yaml"), true, true), "use compose.yaml");
    }

    #[test]
    fn outcome_reuses_leftover_auto_file() {
        assert_eq!(outcome(None, true, true), "reuse .compose.yaml");
    }

    #[test]
    fn outcome_builds_from_dockerfile() {
        assert_eq!(
            outcome(None, false, true),
            "synthesize .compose.yaml from Dockerfile"
        );
    }

    #[test]
    fn outcome_falls_back_to_generic_service() {
        assert_eq!(
            outcome(None, false, false),
            "synthesize generic .compose.yaml"
        );
    }
}
