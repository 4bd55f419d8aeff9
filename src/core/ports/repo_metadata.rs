//! Repository metadata port

/// Local repository metadata used to recognise managed workspaces
#[cfg_attr(test, mockall::automock)]
pub trait RepoMetadata {
    /// Text of the repository's git config file, if there is one and it is readable
    fn config_text(&self) -> Option<String>;

    /// Whether the working directory is a linked worktree
    fn is_linked_worktree(&self) -> bool;
}
