use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

/// Filesystem-based scaffold store rooted at the target directory.
#[derive(Debug, Clone)]
pub struct FilesystemScaffoldStore {
    root: PathBuf,
}

impl FilesystemScaffoldStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn create_dir_if_absent(path: &Path) -> Result<(), AppError> {
        if path.is_dir() {
            return Ok(());
        }
        if path.exists() {
            return Err(AppError::path_creation(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
            ));
        }
        fs::create_dir(path).map_err(|err| AppError::path_creation(path, err))
    }
}

impl ScaffoldStore for FilesystemScaffoldStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<(), AppError> {
        Self::create_dir_if_absent(&self.root)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        Self::create_dir_if_absent(&self.resolve_path(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        fs::write(&full_path, content).map_err(|err| AppError::file_write(full_path, err))
    }
}
