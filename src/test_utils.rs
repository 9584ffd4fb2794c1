//! Test utilities for building throwaway directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temporary directory tree for tests.
///
/// Provides methods for creating files and directories, optionally with
/// pinned modification times. Cleaned up automatically when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a file and pin its modification time to `mtime` seconds
    /// after the epoch.
    pub fn add_file_with_mtime(&self, path: &str, content: &str, mtime: i64) -> PathBuf {
        let full_path = self.add_file(path, content);
        set_mtime(&full_path, mtime);
        full_path
    }

    /// Create a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pin a file's modification time to `secs` seconds after the epoch.
pub fn set_mtime(path: &Path, secs: i64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64);
    let file = fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file");
    file.set_modified(time).expect("Failed to set mtime");
}
