//! Tests for `GitRepoMetadata`

use commit_gates::adapters::git::GitRepoMetadata;
use commit_gates::core::ports::RepoMetadata;
use tempfile::TempDir;

use crate::common::git_repo::TempGitRepo;

#[test]
fn reads_repository_config() {
    let repo = TempGitRepo::new();
    repo.git(&["config", "jinyang.task", "ROM-1"]);

    let metadata = GitRepoMetadata::new(repo.path());
    let config = metadata.config_text().unwrap();
    assert!(config.contains("[core]"));
    assert!(config.contains("jinyang"));
    assert!(!metadata.is_linked_worktree());
}

#[test]
fn no_repository_has_no_metadata() {
    let temp = TempDir::new().unwrap();
    let metadata = GitRepoMetadata::new(temp.path());
    assert_eq!(metadata.config_text(), None);
    assert!(!metadata.is_linked_worktree());
}

#[test]
fn detects_linked_worktree() {
    let repo = TempGitRepo::new();
    repo.commit_file("README.md", "# Site\n");
    let worktree = repo.sibling("feature-wt");
    repo.git(&["worktree", "add", "-q", "-b", "feature", worktree.to_str().unwrap()]);

    let metadata = GitRepoMetadata::new(&worktree);
    assert!(metadata.is_linked_worktree());
    // Shared config of the main repository
    assert!(metadata.config_text().unwrap().contains("[core]"));
}
