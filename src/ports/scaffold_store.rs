//! Output tree of a scaffold run.
//!
//! All `path` arguments are relative to the store root (the target directory).

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for writing the scaffolded application.
pub trait ScaffoldStore {
    /// Root directory all relative paths resolve against.
    fn root(&self) -> &Path;

    /// Create the root directory if absent. Parent directories are never created.
    fn ensure_root(&self) -> Result<(), AppError>;

    /// Create a single directory below the root if absent.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Write `content`, truncating any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Resolve a relative path against the root.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}
