//! Classification of compose, build-definition, and auto-generated files.
//!
//! These checks are shared by the resolver and by callers that classify
//! arbitrary file references outside of a resolution pass.

use std::path::Path;

use taskbox_common::constants::{AUTO_COMPOSE_FILE, COMPOSE_CONFIG_FILES, DOCKERFILE};

/// Returns the first recognized user-authored compose filename present
/// directly under `dir`, if any.
#[must_use]
pub fn find_compose_file(dir: &Path) -> Option<&'static str> {
    COMPOSE_CONFIG_FILES
        .into_iter()
        .find(|name| dir.join(name).is_file())
}

/// Returns whether `path` names a build-definition file.
///
/// Matches by stem or extension, so `Dockerfile`, `Dockerfile.dev`, and
/// `my.Dockerfile` all qualify while `docker-compose.yaml` does not.
/// Callers classifying arbitrary file references rely on the broad match.
#[must_use]
pub fn is_dockerfile(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let extension = path.extension().and_then(|e| e.to_str());
    stem == Some(DOCKERFILE) || extension == Some(DOCKERFILE)
}

/// Returns whether `dir` directly contains the conventional `Dockerfile`.
#[must_use]
pub fn has_dockerfile(dir: &Path) -> bool {
    dir.join(DOCKERFILE).is_file()
}

/// Returns whether `dir` directly contains an auto-generated compose file.
#[must_use]
pub fn has_auto_compose_file(dir: &Path) -> bool {
    dir.join(AUTO_COMPOSE_FILE).is_file()
}

/// Returns whether `path` names an auto-generated compose file, in any
/// directory.
#[must_use]
pub fn is_auto_compose_file(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(AUTO_COMPOSE_FILE)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    #[test]
    fn is_dockerfile_matches_exact_name() {
        assert!(is_dockerfile(Path::new("Dockerfile")));
        assert!(is_dockerfile(Path::new("/task/Dockerfile")));
    }

    #[test]
    fn is_dockerfile_matches_stem_and_suffix_variants() {
        assert!(is_dockerfile(Path::new("Dockerfile.dev")));
        assert!(is_dockerfile(Path::new("my.Dockerfile")));
        assert!(is_dockerfile(Path::new("/task/agent.Dockerfile")));
    }

    #[test]
    fn is_dockerfile_rejects_compose_files() {
        assert!(!is_dockerfile(Path::new("docker-compose.yaml")));
        assert!(!is_dockerfile(Path::new("compose.yml")));
        assert!(!is_dockerfile(Path::new("dockerfile")));
    }

    #[test]
    fn is_auto_compose_file_checks_base_name_only() {
        assert!(is_auto_compose_file(Path::new(".compose.yaml")));
        assert!(is_auto_compose_file(Path::new("/any/path/.compose.yaml")));
        assert!(!is_auto_compose_file(Path::new("/any/path/compose.yaml")));
    }

    #[test]
    fn find_compose_file_returns_none_for_empty_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(find_compose_file(dir.path()), None);
    }

    #[test]
    fn find_compose_file_honors_priority_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("docker-compose.yml"), "services: {}\n").expect("write");
        assert_eq!(find_compose_file(dir.path()), Some("docker-compose.yml"));

        fs::write(dir.path().join("compose.yaml"), "services: {}\n").expect("write");
        assert_eq!(find_compose_file(dir.path()), Some("compose.yaml"));
    }

    #[test]
    fn find_compose_file_ignores_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("compose.yaml")).expect("mkdir");
        assert_eq!(find_compose_file(dir.path()), None);
    }

    #[test]
    fn has_dockerfile_requires_exact_conventional_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("agent.Dockerfile"), "FROM scratch\n").expect("write");
        assert!(!has_dockerfile(dir.path()));

        fs::write(dir.path().join("Dockerfile"), "FROM scratch\n").expect("write");
        assert!(has_dockerfile(dir.path()));
    }

    #[test]
    fn has_auto_compose_file_detects_reserved_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(!has_auto_compose_file(dir.path()));

        fs::write(dir.path().join(".compose.yaml"), "services: {}\n").expect("write");
        assert!(has_auto_compose_file(dir.path()));
    }
}
