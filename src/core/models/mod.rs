//! Domain models for commit-gates
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Report`] / [`Finding`] - What a gate decided and why
//! - [`Whitelist`] - Commit messages exempt from issue references
//! - [`IssueIdPattern`] - Issue IDs inside a commit message
//! - [`TrackerStatus`] - Active task and credential presence

mod finding;
mod issue_id;
mod tracker;
mod whitelist;

pub use finding::{Finding, Level, Report};
pub use issue_id::IssueIdPattern;
pub use tracker::{CredentialSource, TrackerStatus};
pub use whitelist::{Whitelist, WhitelistRule};
