//! Fixed compose documents synthesized for directories without a
//! user-authored configuration.
//!
//! Both templates begin with a two-line comment marking the file as
//! transient and safe to delete once the task completes.

/// Compose document for a generic sandbox service backed by the prebuilt
/// tool-support image.
pub const COMPOSE_GENERIC_YAML: &str = r#"# inspect auto-generated docker compose file
# (will be removed when task is complete)
services:
  default:
    image: "aisiuk/inspect-tool-support"
    command: "tail -f /dev/null"
    init: true
    network_mode: none
    stop_grace_period: 1s
"#;

/// Compose document that builds the sandbox image from a build-definition
/// file in the task directory. `{dockerfile}` is substituted by
/// [`dockerfile_compose`].
pub const COMPOSE_DOCKERFILE_YAML: &str = r#"# inspect auto-generated docker compose file
# (will be removed when task is complete)
services:
  default:
    build:
      context: "."
      dockerfile: "{dockerfile}"
    command: "tail -f /dev/null"
    init: true
    network_mode: none
    stop_grace_period: 1s
"#;

/// Renders the build-from-Dockerfile template for the given filename.
#[must_use]
pub fn dockerfile_compose(dockerfile: &str) -> String {
    COMPOSE_DOCKERFILE_YAML.replace("{dockerfile}", dockerfile)
}
