//! Staged change detection
//!
//! Implements [`StagedChangeInspector`] by shelling out to `git diff --cached`
//! and `git show :<path>`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::ports::StagedChangeInspector;
use crate::error::{GateError, Result};

/// Git-backed view of the index
#[derive(Debug, Clone)]
pub struct GitStagedInspector {
    /// Working directory git runs in
    workdir: PathBuf,
}

impl GitStagedInspector {
    /// Create an inspector for the repository containing `workdir`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run git and return its stdout
    fn git(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GateError::GitSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GateError::GitFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Staged paths selected by a `--diff-filter` value
    fn staged_names(&self, filter: &str) -> Result<BTreeSet<PathBuf>> {
        let diff_filter = format!("--diff-filter={filter}");
        let stdout = self.git(&["diff", "--cached", "--name-only", "-z", &diff_filter])?;
        Ok(stdout.split('\0').filter(|s| !s.is_empty()).map(PathBuf::from).collect())
    }
}

impl StagedChangeInspector for GitStagedInspector {
    fn list_deleted_paths(&self) -> Result<BTreeSet<PathBuf>> {
        self.staged_names("D")
    }

    fn list_modified_paths(&self) -> Result<BTreeSet<PathBuf>> {
        // Lowercase excludes: everything staged except deletions
        self.staged_names("d")
    }

    fn read_staged_blob(&self, path: &Path) -> Result<String> {
        // Index paths always use forward slashes
        let spec = format!(":{}", path.to_string_lossy().replace('\\', "/"));
        self.git(&["show", &spec])
    }
}
