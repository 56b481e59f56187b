//! # Project Root Paths
//!
//! Derives the project root from the location of the running unit.
//! The root is the directory three levels above the unit: the unit's own
//! directory, then its parent, then its grandparent.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of `parent()` steps taken from the unit path.
pub const ROOT_DEPTH: usize = 3;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Unable to resolve the location of the running unit: {source}")]
    LocationResolution {
        #[source]
        source: std::io::Error,
    },

    #[error("Path {path} is fewer than {depth} levels below the filesystem root")]
    PathBounds { path: PathBuf, depth: usize },
}

impl LocateError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LocateError::LocationResolution { .. } => "location_resolution",
            LocateError::PathBounds { .. } => "path_bounds",
        }
    }
}

/// Returns the project root for a unit located at `unit`.
///
/// Relative paths are resolved against the current working directory.
/// Symlinks are left as-is and `..` components are not collapsed.
pub fn project_root(unit: &Path) -> Result<PathBuf, LocateError> {
    let absolute =
        std::path::absolute(unit).map_err(|source| LocateError::LocationResolution { source })?;
    ascend(&absolute, ROOT_DEPTH)
}

/// Walks `levels` parents up from `path`, refusing to go past the root.
pub fn ascend(path: &Path, levels: usize) -> Result<PathBuf, LocateError> {
    let mut current = path;
    for _ in 0..levels {
        current = current.parent().ok_or_else(|| LocateError::PathBounds {
            path: path.to_path_buf(),
            depth: levels,
        })?;
    }
    Ok(current.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_three_levels_up() {
        let root = project_root(Path::new("/a/b/c/d/unit")).unwrap();
        assert_eq!(root, PathBuf::from("/a/b"));
    }

    #[test]
    fn test_project_root_reaches_filesystem_root() {
        let root = project_root(Path::new("/a/b/unit")).unwrap();
        assert_eq!(root, PathBuf::from("/"));
    }

    #[test]
    fn test_project_root_too_shallow() {
        let err = project_root(Path::new("/a/unit")).unwrap_err();
        assert!(matches!(err, LocateError::PathBounds { depth: 3, .. }));
        assert_eq!(err.kind(), "path_bounds");

        let err = project_root(Path::new("/")).unwrap_err();
        assert!(matches!(err, LocateError::PathBounds { .. }));
    }

    #[test]
    fn test_project_root_relative_unit_is_absolute() {
        let root = project_root(Path::new("w/x/y/z/unit")).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("w/x"));
    }

    #[test]
    fn test_project_root_is_stable() {
        let unit = Path::new("/srv/app/target/release/project-directory");
        let first = project_root(unit).unwrap();
        let second = project_root(unit).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_ascend_zero_levels() {
        let path = Path::new("/a/b");
        assert_eq!(ascend(path, 0).unwrap(), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_error_messages() {
        let err = ascend(Path::new("/a"), 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Path /a is fewer than 3 levels below the filesystem root"
        );
    }
}
