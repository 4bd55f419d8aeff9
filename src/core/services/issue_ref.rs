//! Issue-reference gate
//!
//! Enforces the tracker-first mandate: every non-maintenance commit must cite
//! an issue ID. Only [`IssueRefEnforcer::check_commit_msg`] can block.
//! [`IssueRefEnforcer::enforce_task_exists`] is advisory and
//! [`IssueRefEnforcer::tracker_status`] is a report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IssueRefConfig;
use crate::core::models::{
    CredentialSource, Finding, IssueIdPattern, Report, TrackerStatus, Whitelist,
};
use crate::core::ports::RepoMetadata;
use crate::core::services::BYPASS_HINT;
use crate::error::{GateError, Result};
use crate::paths;

/// Command name of the commit-message check
pub const CHECK_COMMIT_MSG: &str = "check-commit-msg";

/// Command name of the advisory task check
pub const ENFORCE_TASK_EXISTS: &str = "enforce-task-exists";

/// Command name of the status report
pub const CHECK_LINEAR: &str = "check-linear";

/// Evaluates the issue-reference policy for one working directory
#[derive(Debug)]
pub struct IssueRefEnforcer {
    config: IssueRefConfig,
    root: PathBuf,
    whitelist: Whitelist,
    issue_ids: IssueIdPattern,
}

impl IssueRefEnforcer {
    /// Compile the policy. Fails only if the configured prefix yields an invalid pattern.
    pub fn new(config: IssueRefConfig, root: impl Into<PathBuf>) -> Result<Self> {
        let whitelist = Whitelist::standard(&config.tracker, &config.issue_prefix)?;
        let issue_ids = IssueIdPattern::new(&config.issue_prefix)?;
        Ok(Self {
            config,
            root: root.into(),
            whitelist,
            issue_ids,
        })
    }

    /// Task ID held by the marker file, if any
    ///
    /// An unreadable or blank marker counts as no task.
    #[must_use]
    pub fn active_task(&self) -> Option<String> {
        let marker = paths::resolve(&self.root, &self.config.marker_file);
        read_optional(&marker)
            .map(|content| content.trim().to_string())
            .filter(|id| !id.is_empty())
    }

    /// Read the commit message at `msg_file` and evaluate it
    pub fn check_commit_msg(&self, msg_file: &Path) -> Result<Report> {
        let message = fs::read_to_string(msg_file).map_err(|source| GateError::CommitMessage {
            path: msg_file.to_path_buf(),
            source,
        })?;
        Ok(self.evaluate_message(&message))
    }

    /// Decide whether `message` may be committed
    ///
    /// Whitelisted messages pass regardless of IDs. Otherwise at least one
    /// issue ID must appear anywhere in the message.
    #[must_use]
    pub fn evaluate_message(&self, message: &str) -> Report {
        let tracker = &self.config.tracker;
        let mut report = Report::new(CHECK_COMMIT_MSG, format!("{tracker} issue reference"))
            .with_remediation(BYPASS_HINT);

        if let Some(rule) = self.whitelist.first_match(message) {
            log::debug!("commit message exempt by rule '{}'", rule.name());
            return report;
        }

        let ids = self.issue_ids.find_all(message);
        if !ids.is_empty() {
            report.push(Finding::info(format!("{tracker} task referenced: {}", ids.join(", "))));
            return report;
        }

        let placeholder = self.config.id_placeholder();
        let mut guidance = format!(
            "Commit message does not reference a {tracker} task ({placeholder})\n   \
             MANDATORY: Create {tracker} task before starting work:\n      \
             {create}\n   \
             Or add [{placeholder}] to your commit message",
            create = self.config.create_command,
        );
        if let Some(task) = self.active_task() {
            guidance.push_str(&format!(
                "\n   Current {tracker} task: {task}\n      Run: {}",
                self.config.update_command_for(&task)
            ));
        }
        report.push(Finding::block(guidance));

        report
    }

    /// Advisory pre-commit check; the report never blocks
    ///
    /// Passes quietly when a task is active or the workspace is managed, warns
    /// when the mandate document asks for tasks and none is active.
    pub fn enforce_task_exists(&self, metadata: &impl RepoMetadata) -> Report {
        let tracker = &self.config.tracker;
        let mut report = Report::new(ENFORCE_TASK_EXISTS, format!("{tracker} task"));

        if let Some(task) = self.active_task() {
            report.push(Finding::info(format!("{tracker} task active: {task}")));
            return report;
        }

        if self.is_managed_workspace(metadata) {
            log::debug!("managed workspace, task context is provided externally");
            return report;
        }

        let mandate = paths::resolve(&self.root, &self.config.mandate_doc);
        let mandated = read_optional(&mandate).is_some_and(|doc| {
            self.config.mandate_keywords.iter().any(|keyword| doc.contains(keyword.as_str()))
        });
        if mandated {
            report.push(Finding::warn(format!(
                "No active {tracker} task found\n   \
                 {}-FIRST MANDATE: Create task before committing:\n      {}",
                tracker.to_uppercase(),
                self.config.create_command
            )));
        }

        report
    }

    /// Active task plus where, if anywhere, the tracker credential is configured
    ///
    /// `lookup` reads an environment variable; the value is only tested for
    /// presence.
    pub fn tracker_status(&self, lookup: impl Fn(&str) -> Option<String>) -> TrackerStatus {
        let var = &self.config.credential_var;
        let credential = if lookup(var).is_some_and(|value| !value.is_empty()) {
            CredentialSource::Environment
        } else {
            let env_file = paths::resolve(&self.root, &self.config.credential_env_file);
            match read_optional(&env_file) {
                Some(content) if content.contains(var.as_str()) => {
                    CredentialSource::EnvFile { path: env_file }
                },
                _ => CredentialSource::Missing,
            }
        };

        let active_task = self.active_task();
        let next_command = active_task.as_deref().map_or_else(
            || self.config.create_command.clone(),
            |task| self.config.update_command_for(task),
        );

        TrackerStatus {
            tracker: self.config.tracker.clone(),
            active_task,
            next_command,
            credential_var: var.clone(),
            credential,
        }
    }

    fn is_managed_workspace(&self, metadata: &impl RepoMetadata) -> bool {
        if metadata.is_linked_worktree() {
            return true;
        }
        metadata.config_text().is_some_and(|text| {
            self.config.workspace_signals.iter().any(|signal| text.contains(signal.as_str()))
        })
    }
}

/// Contents of an optional file; absence and read errors both yield `None`
fn read_optional(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            log::warn!("ignoring unreadable {}: {e}", path.display());
            None
        },
    }
}
