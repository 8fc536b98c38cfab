//! Common test utilities for bookmrk integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute the
//! user's real bookmark store.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with isolated data storage.
///
/// Each `TestEnv` creates two temporary directories:
/// - `work_dir`: the directory the command runs in, and where target paths
///   for bookmarks are created
/// - `data_dir`: holds the bookmark store (via `BOOKMRK_DATA_DIR`)
///
/// The `bookmrk()` method returns a `Command` that sets `BOOKMRK_DATA_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the bookmrk binary with an isolated data directory.
    pub fn bookmrk(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookmrk"));
        cmd.current_dir(self.work_dir.path());
        cmd.env("BOOKMRK_DATA_DIR", self.data_dir.path());
        cmd
    }

    /// Create a directory under the work dir and return its absolute path.
    pub fn make_target(&self, name: &str) -> String {
        let path = self.work_dir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        // Canonicalize so assertions compare against what the tool stores
        // (tmpdirs are often behind symlinks, e.g. /tmp on macOS).
        fs::canonicalize(&path)
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    /// Add a bookmark and assert success.
    pub fn add(&self, name: &str, path: &str) {
        self.bookmrk()
            .args(["add", "-n", name, "-p", path])
            .assert()
            .success();
    }

    /// Path of the persisted store file.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.path().join("bookmarks.json")
    }

    /// Get the path to the work directory.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
