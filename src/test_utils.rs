//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped, after restoring
/// permissions on anything made unreadable through [`TestTree::lock`].
pub struct TestTree {
    dir: TempDir,
    locked: Vec<PathBuf>,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            locked: Vec::new(),
        }
    }

    /// The `foo/{bar.ts, baz/hello, meow}` fixture used across the tests.
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("foo/bar.ts", "");
        tree.add_file("foo/baz/hello", "");
        tree.add_file("foo/meow", "");
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `path` whose stored target is `target`.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Revoke all permissions on `path`.
    #[cfg(unix)]
    pub fn lock(&mut self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        set_mode(&full_path, 0o000);
        self.locked.push(full_path.clone());
        full_path
    }

    /// Whether the current process can still list a locked directory,
    /// which is the case when running as root.
    pub fn can_read(&self, path: &str) -> bool {
        fs::read_dir(self.dir.path().join(path)).is_ok()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        #[cfg(unix)]
        for path in &self.locked {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .expect("Failed to read metadata")
        .permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
