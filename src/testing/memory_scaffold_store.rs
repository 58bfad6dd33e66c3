use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

/// In-memory scaffold store for testing.
#[derive(Debug, Clone)]
pub struct MemoryScaffoldStore {
    root: PathBuf,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    // Ordered log of every write, including overwrites.
    writes: Arc<Mutex<Vec<PathBuf>>>,
    fail_on: Option<PathBuf>,
}

impl MemoryScaffoldStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("app"),
            dirs: Arc::default(),
            files: Arc::default(),
            writes: Arc::default(),
            fail_on: None,
        }
    }

    /// Fail with `FileWrite` when writing `path` (relative to root).
    pub fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self { fail_on: Some(path.into()), ..Self::new() }
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }
}

impl ScaffoldStore for MemoryScaffoldStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<(), AppError> {
        self.dirs.lock().unwrap().insert(PathBuf::new());
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        if self.files.lock().unwrap().contains_key(path) {
            return Err(AppError::path_creation(
                self.resolve_path(path),
                io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
            ));
        }
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(AppError::file_write(
                self.resolve_path(path),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
