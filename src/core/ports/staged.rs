//! Staged change port
//!
//! Defines the interface for querying what is staged for the next commit.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Read-only view of the index for the commit being attempted
///
/// Paths are relative to the repository root, as git reports them.
#[cfg_attr(test, mockall::automock)]
pub trait StagedChangeInspector {
    /// Paths staged for deletion
    fn list_deleted_paths(&self) -> Result<BTreeSet<PathBuf>>;

    /// Paths staged with any change other than deletion
    fn list_modified_paths(&self) -> Result<BTreeSet<PathBuf>>;

    /// Content of `path` as recorded in the index
    fn read_staged_blob(&self, path: &Path) -> Result<String>;
}
