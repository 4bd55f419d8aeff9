//! Repository metadata via libgit2

use std::fs;
use std::path::PathBuf;

use git2::Repository;

use crate::core::ports::RepoMetadata;

/// Reads git config and worktree state for the repository at `workdir`
#[derive(Debug, Clone)]
pub struct GitRepoMetadata {
    workdir: PathBuf,
}

impl GitRepoMetadata {
    /// Create a metadata reader. `workdir` must be the top of a working tree.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn open(&self) -> Option<Repository> {
        Repository::open(&self.workdir)
            .map_err(|e| log::debug!("no repository at {}: {}", self.workdir.display(), e.message()))
            .ok()
    }
}

impl RepoMetadata for GitRepoMetadata {
    fn config_text(&self) -> Option<String> {
        let repo = self.open()?;
        // Linked worktrees share the main repository's config
        let path = repo.commondir().join("config");
        fs::read_to_string(&path)
            .map_err(|e| log::debug!("cannot read {}: {e}", path.display()))
            .ok()
    }

    fn is_linked_worktree(&self) -> bool {
        self.open().is_some_and(|repo| repo.is_worktree())
    }
}
