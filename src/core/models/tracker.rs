//! Issue tracker status

use std::path::PathBuf;

use serde::Serialize;

/// Where the tracker credential was found. The value itself is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum CredentialSource {
    /// Set and non-empty in the process environment
    Environment,
    /// Declared in the fallback env file
    EnvFile {
        /// File that declares it
        path: PathBuf,
    },
    /// Not found anywhere
    Missing,
}

impl CredentialSource {
    /// Whether a credential is configured at all
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Snapshot reported by `check-linear`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerStatus {
    /// Tracker display name
    pub tracker: String,
    /// Task ID from the marker file, if any
    pub active_task: Option<String>,
    /// Suggested next command (update the active task, or create one)
    pub next_command: String,
    /// Credential variable name
    pub credential_var: String,
    /// Where the credential was found
    pub credential: CredentialSource,
}
