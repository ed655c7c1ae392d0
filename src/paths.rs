use crate::error::{PrismError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Subdirectories created under the base path, in creation order
pub const THOUGHTS_DIRECTORIES: [&str; 4] = [
    "thoughts/shared/research",
    "thoughts/shared/plans",
    "thoughts/shared/validation",
    "thoughts/local",
];

pub const GITIGNORE_PATH: &str = ".gitignore";

/// Resolve `path` to an absolute, normalized path.
///
/// Existing paths are canonicalized whole. Otherwise components are walked in
/// order: while the prefix exists each step is canonicalized, so `..` after a
/// symlink climbs out of the link target. From the first missing component on,
/// `.` and `..` are folded lexically.
pub fn resolve_base_path(path: &Path) -> Result<PathBuf> {
    let resolve_err = |source| PrismError::Resolve {
        path: path.to_path_buf(),
        source,
    };

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_err(resolve_err)?.join(path)
    };

    if absolute.exists() {
        return fs::canonicalize(&absolute).map_err(resolve_err);
    }

    let mut resolved = PathBuf::new();
    let mut missing = false;
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if !missing {
                    if resolved.exists() {
                        resolved = fs::canonicalize(&resolved).map_err(resolve_err)?;
                    } else {
                        missing = true;
                    }
                }
            }
        }
    }

    Ok(resolved)
}

/// Display name of the base directory, used in the instructions-file header.
/// The filesystem root has no name and yields an empty string.
pub fn project_name(base: &Path) -> String {
    base.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directories_are_under_thoughts() {
        assert!(THOUGHTS_DIRECTORIES.iter().all(|d| d.starts_with("thoughts/")));
        assert_eq!(THOUGHTS_DIRECTORIES.last(), Some(&"thoughts/local"));
    }

    #[test]
    fn test_resolve_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_base_path(temp_dir.path()).unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, fs::canonicalize(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_resolve_missing_directory_normalizes() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("new/./project/../app");
        let resolved = resolve_base_path(&input).unwrap();

        let expected = fs::canonicalize(temp_dir.path()).unwrap().join("new/app");
        assert_eq!(resolved, expected);
        assert!(!resolved.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_symlink_follows_link_target() {
        let temp_dir = TempDir::new().unwrap();
        let root = fs::canonicalize(temp_dir.path()).unwrap();
        fs::create_dir_all(root.join("work")).unwrap();
        fs::create_dir_all(root.join("elsewhere/sub")).unwrap();
        std::os::unix::fs::symlink(root.join("elsewhere/sub"), root.join("work/link")).unwrap();

        let existing = resolve_base_path(&root.join("work/link/..")).unwrap();
        assert_eq!(existing, root.join("elsewhere"));

        let missing = resolve_base_path(&root.join("work/link/../new/./x/../app")).unwrap();
        assert_eq!(missing, root.join("elsewhere/new/app"));
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_dir_at_root_stays_at_root() {
        let resolved = resolve_base_path(Path::new("/../no-such-prism-dir/x")).unwrap();
        assert_eq!(resolved, PathBuf::from("/no-such-prism-dir/x"));
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name(Path::new("/home/dev/acme-api")), "acme-api");
        assert_eq!(project_name(Path::new("/")), "");
    }
}
