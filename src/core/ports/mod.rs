//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the gate logic and git.
//! Implementations live in the `adapters` module; tests substitute
//! in-memory fakes.

mod repo_metadata;
mod staged;

pub use repo_metadata::RepoMetadata;
pub use staged::StagedChangeInspector;

#[cfg(test)]
pub use repo_metadata::MockRepoMetadata;
#[cfg(test)]
pub use staged::MockStagedChangeInspector;
