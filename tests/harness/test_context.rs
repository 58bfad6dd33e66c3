//! Shared testing harness for `layla` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `layla` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("layla").expect("Failed to locate layla binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Read a generated file relative to the work directory.
    pub(crate) fn read(&self, path: impl AsRef<Path>) -> String {
        let full = self.work_dir.join(path.as_ref());
        fs::read_to_string(&full)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", full.display(), e))
    }

    /// Relative paths of every file below `dir`, sorted.
    pub(crate) fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let base = self.work_dir.join(dir.as_ref());
        let mut files = Vec::new();
        collect(&base, &base, &mut files, &mut Vec::new());
        files.sort();
        files
    }

    /// Relative paths of every directory below `dir`, sorted, excluding `dir` itself.
    pub(crate) fn dirs_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let base = self.work_dir.join(dir.as_ref());
        let mut dirs = Vec::new();
        collect(&base, &base, &mut Vec::new(), &mut dirs);
        dirs.sort();
        dirs
    }

    /// Assert that the full scaffold exists below `dir`.
    pub(crate) fn assert_scaffold_exists(&self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        for file in [
            "contents/__init__.py",
            "contents/layla_lambda.py",
            "contents/requirements.txt",
            "samconfig.toml",
            "template.yaml",
        ] {
            let path = self.work_dir.join(dir).join(file);
            assert!(path.is_file(), "{} should exist", path.display());
        }
    }
}

fn collect(base: &Path, dir: &Path, files: &mut Vec<PathBuf>, dirs: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read directory entry").path();
        let relative = path.strip_prefix(base).expect("entry outside base").to_path_buf();
        if path.is_dir() {
            dirs.push(relative);
            collect(base, &path, files, dirs);
        } else {
            files.push(relative);
        }
    }
}
