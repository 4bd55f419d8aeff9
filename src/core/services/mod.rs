//! Gate services
//!
//! Policy evaluation. Services read through the port traits and the
//! filesystem, and return [`Report`](crate::core::models::Report)s; they never
//! print or exit.

mod build_safety;
mod issue_ref;

pub use build_safety::{
    BuildSafetyChecker, CHECK_CRITICAL_FILES, CHECK_CSS_BUNDLE, CHECK_NEXT_CONFIG_SAFETY,
};
pub use issue_ref::{CHECK_COMMIT_MSG, CHECK_LINEAR, ENFORCE_TASK_EXISTS, IssueRefEnforcer};

/// Remediation shown under every blocking report
pub const BYPASS_HINT: &str = "To bypass in emergencies: git commit --no-verify";
