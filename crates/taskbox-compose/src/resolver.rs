//! Compose configuration resolution for task directories.
//!
//! A user-authored compose file always wins. Failing that, a leftover
//! auto-generated file from a prior run is reused as-is, and only then is
//! a new one synthesized: built from the directory's `Dockerfile` when one
//! exists, otherwise the generic tool-support service.

use std::fs;
use std::path::{Path, PathBuf};

use taskbox_common::constants::{AUTO_COMPOSE_FILE, DOCKERFILE};
use taskbox_common::error::{Result, TaskboxError};

use crate::detect::{
    find_compose_file, has_auto_compose_file, has_dockerfile, is_auto_compose_file,
};
use crate::template;

/// Resolves the compose file `dir` should be launched with.
///
/// Returns the absolute, symlink-resolved path of the winning file. The
/// filesystem is only written to when a new auto-generated file has to be
/// synthesized; existing files (user-authored or auto-generated) are
/// returned untouched.
///
/// # Errors
///
/// Returns an error if the auto-generated file cannot be written or the
/// winning path cannot be canonicalized.
pub fn resolve_compose_file(dir: &Path) -> Result<PathBuf> {
    // a user-authored compose file carries all the config we need
    if let Some(name) = find_compose_file(dir) {
        tracing::debug!(dir = %dir.display(), file = name, "using existing compose file");
        return canonical(&dir.join(name));
    }

    // reuse a leftover auto-generated file rather than regenerating it
    if has_auto_compose_file(dir) {
        tracing::debug!(dir = %dir.display(), "reusing auto-generated compose file");
        return canonical(&dir.join(AUTO_COMPOSE_FILE));
    }

    if has_dockerfile(dir) {
        tracing::info!(dir = %dir.display(), "synthesizing compose file from Dockerfile");
        return write_auto_compose_file(dir, &template::dockerfile_compose(DOCKERFILE));
    }

    tracing::info!(dir = %dir.display(), "synthesizing generic compose file");
    write_auto_compose_file(dir, template::COMPOSE_GENERIC_YAML)
}

/// Regenerates a previously-deleted auto-generated compose file before use.
///
/// Runs a full resolution against the file's parent directory when `file`
/// is recognized as auto-generated and missing on disk. No-op for `None`,
/// empty paths, user-authored files, and files that still exist.
///
/// # Errors
///
/// Returns an error if regeneration fails to write the file.
pub fn ensure_auto_compose_file(file: Option<&Path>) -> Result<()> {
    let Some(file) = file.filter(|f| !f.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !is_auto_compose_file(file) || file.exists() {
        return Ok(());
    }
    tracing::debug!(path = %file.display(), "regenerating missing auto-generated compose file");
    let parent = file.parent().unwrap_or_else(|| Path::new("."));
    let _ = resolve_compose_file(parent)?;
    Ok(())
}

/// Removes the auto-generated compose file once its task has completed.
///
/// Best-effort: deletion failures are logged at WARN and discarded, so
/// teardown callers never see an error. User-authored files are never
/// touched.
pub fn cleanup_auto_compose_file(file: Option<&Path>) {
    let Some(file) = file.filter(|f| !f.as_os_str().is_empty()) else {
        return;
    };
    if !is_auto_compose_file(file) || !file.exists() {
        return;
    }
    if let Err(err) = fs::remove_file(file) {
        tracing::warn!(path = %file.display(), error = %err, "failed to clean up compose file");
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| TaskboxError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_auto_compose_file(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join(AUTO_COMPOSE_FILE);
    fs::write(&path, contents).map_err(|e| TaskboxError::Io {
        path: path.clone(),
        source: e,
    })?;
    canonical(&path)
}
