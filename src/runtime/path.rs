//! Path utility functions for normalization and comparison.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // At the root there is nothing to pop; keep the `..`
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => {
                result.push(component);
            }
        }
    }
    result
}

/// Check if a path is under a given directory by comparing normalized path components.
/// Returns true if `path` is under `dir` (i.e., `dir` is a prefix of `path`).
///
/// `/opt/cellar-old/foo` is NOT under `/opt/cellar`, and neither is
/// `/opt/cellar/../etc/passwd`.
pub fn is_path_under(path: &Path, dir: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(dir))
}

/// Resolve `path` against `base` if it is relative, then normalize it.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_simple() {
        assert_eq!(
            normalize_path(Path::new("/usr/local/Cellar")),
            PathBuf::from("/usr/local/Cellar")
        );
    }

    #[test]
    fn test_normalize_path_with_dot() {
        assert_eq!(
            normalize_path(Path::new("/usr/./local/./Cellar")),
            PathBuf::from("/usr/local/Cellar")
        );
    }

    #[test]
    fn test_normalize_path_with_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/opt/software/../Cellar/foo")),
            PathBuf::from("/opt/Cellar/foo")
        );
    }

    #[test]
    fn test_normalize_path_parent_at_root() {
        assert_eq!(normalize_path(Path::new("/../foo")), PathBuf::from("/foo"));
    }

    #[test]
    fn test_normalize_path_relative() {
        assert_eq!(
            normalize_path(Path::new("a/b/../c")),
            PathBuf::from("a/c")
        );
    }

    #[test]
    fn test_is_path_under_simple() {
        assert!(is_path_under(
            Path::new("/usr/local/Cellar/foo/1.0"),
            Path::new("/usr/local/Cellar")
        ));
    }

    #[test]
    fn test_is_path_under_same_path() {
        assert!(is_path_under(
            Path::new("/usr/local/Cellar"),
            Path::new("/usr/local/Cellar")
        ));
    }

    #[test]
    fn test_is_path_under_partial_component_match() {
        // "Cellar-old" shares a string prefix with "Cellar" but is a different directory
        assert!(!is_path_under(
            Path::new("/usr/local/Cellar-old/foo/1.0"),
            Path::new("/usr/local/Cellar")
        ));
    }

    #[test]
    fn test_is_path_under_directory_traversal() {
        assert!(!is_path_under(
            Path::new("/usr/local/Cellar/../../etc/passwd"),
            Path::new("/usr/local/Cellar")
        ));
    }

    #[test]
    fn test_is_path_under_path_shorter_than_dir() {
        assert!(!is_path_under(
            Path::new("/usr/local"),
            Path::new("/usr/local/Cellar")
        ));
    }

    #[test]
    fn test_resolve_against_relative() {
        assert_eq!(
            resolve_against(Path::new("/opt/brewlink"), Path::new("../Cellar")),
            PathBuf::from("/opt/Cellar")
        );
    }

    #[test]
    fn test_resolve_against_absolute_passthrough() {
        assert_eq!(
            resolve_against(Path::new("/opt/brewlink"), Path::new("/usr/local/Cellar")),
            PathBuf::from("/usr/local/Cellar")
        );
    }
}
