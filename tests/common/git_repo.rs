//! Temporary git repository helper for adapter and integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new temporary git repository
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("repo");
        std::fs::create_dir_all(&path).expect("Failed to create repo directory");

        let repo = Self {
            _temp_dir: temp_dir,
            path,
        };
        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory next to the repository, inside the same temp dir
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.path.parent().expect("repo has a parent").join(name)
    }

    /// Write a file to the working copy
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Stage a file
    pub fn stage(&self, name: &str) {
        self.git(&["add", name]);
    }

    /// Stage the deletion of a tracked file
    pub fn stage_removal(&self, name: &str) {
        self.git(&["rm", "-q", name]);
    }

    /// Commit staged changes
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "-q", "-m", message]);
    }

    /// Write, stage and commit a file in one go
    pub fn commit_file(&self, name: &str, content: &str) {
        self.write_file(name, content);
        self.stage(name);
        self.commit(&format!("chore: add {name}"));
    }

    /// Run a git command, panicking if it fails
    pub fn git(&self, args: &[&str]) -> std::process::Output {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .expect("Failed to run git command");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}
