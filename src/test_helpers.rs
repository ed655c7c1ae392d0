//! Test helpers for creating hermetic filesystem test environments
//!
//! # Usage
//!
//! ```rust,ignore
//! use prism_init::test_helpers::TestProject;
//!
//! let project = TestProject::new()?;
//! project.add_file(".gitignore", "target/\n")?;
//! let before = project.snapshot()?;
//! // run the initializer against project.root()
//! ```

use crate::error::{PrismError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Every entry under the project root: `None` for directories, bytes for files
pub type Snapshot = BTreeMap<PathBuf, Option<Vec<u8>>>;

/// Test project builder for creating hermetic filesystem environments
pub struct TestProject {
    // Held so the directory lives as long as the project
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl TestProject {
    /// Create a new empty test project in a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        // Canonical so it compares equal to what the initializer resolves
        let project_root = fs::canonicalize(temp_dir.path())?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Add a file relative to the project root, creating parent directories
    ///
    /// Returns the absolute path to the created file.
    pub fn add_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.project_root.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrismError::create_dir(parent, e))?;
        }
        fs::write(&file_path, content).map_err(|e| PrismError::write(&file_path, e))?;

        Ok(file_path)
    }

    /// Read a file relative to the project root. Panics if it is missing.
    pub fn read(&self, relative_path: &str) -> String {
        let path = self.project_root.join(relative_path);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }

    /// Capture the whole tree so two points in time can be compared byte for byte
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();

        for entry in WalkDir::new(&self.project_root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| PrismError::Io(e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(&self.project_root)
                .unwrap_or(entry.path())
                .to_path_buf();

            let content = if entry.file_type().is_file() {
                Some(fs::read(entry.path()).map_err(|e| PrismError::read(entry.path(), e))?)
            } else {
                None
            };
            snapshot.insert(relative, content);
        }

        Ok(snapshot)
    }

    /// Get the path to the project root directory
    pub fn root(&self) -> &Path {
        &self.project_root
    }

    /// Get a path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }
}
