//! Git integration adapter
//!
//! - [`staging`] - Staged file listing and blob retrieval (git CLI)
//! - [`metadata`] - Repository config and worktree detection (libgit2)

pub mod metadata;
pub mod staging;

pub use metadata::GitRepoMetadata;
pub use staging::GitStagedInspector;
