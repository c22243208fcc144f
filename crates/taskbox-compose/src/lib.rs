//! # taskbox-compose
//!
//! Decides which docker compose configuration a task sandbox should be
//! launched with.
//!
//! Handles:
//! - **Detect**: classification of compose, Dockerfile, and auto-generated filenames.
//! - **Template**: the two fixed compose documents taskbox can synthesize.
//! - **Resolver**: lookup, synthesis, lazy regeneration, and best-effort cleanup.
//!
//! The resolver prepares input for whatever component actually invokes the
//! compose tooling; it never shells out or parses YAML itself.

pub mod detect;
pub mod resolver;
pub mod template;
