//! Gate configuration
//!
//! Policy constants live here with their defaults. A repository may override
//! any of them in `.commit-gates.toml`:
//!
//! ```toml
//! [build]
//! min_bundle_bytes = 8192
//!
//! [issue]
//! issue_prefix = "ENG"
//! marker_file = "/var/run/agent/task.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GateError, Result};
use crate::paths;

/// Complete configuration for both gates
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GateConfig {
    /// Build-safety policy
    #[serde(default)]
    pub build: BuildSafetyConfig,
    /// Issue-reference policy
    #[serde(default)]
    pub issue: IssueRefConfig,
}

/// Policy for the build-safety gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildSafetyConfig {
    /// PostCSS config that must survive, relative to the repository root
    pub postcss_config: PathBuf,
    /// Substring the PostCSS config must contain
    pub required_plugin: String,
    /// Framework config that must not silence build errors
    pub next_config: PathBuf,
    /// Substring forbidden in the framework config
    pub forbidden_directive: String,
    /// Directory holding compiled stylesheet chunks
    pub css_dir: PathBuf,
    /// Glob selecting stylesheet artifacts inside `css_dir`
    pub css_glob: String,
    /// Smallest acceptable total bundle size in bytes
    pub min_bundle_bytes: u64,
    /// Size a healthy bundle is expected to have, quoted in diagnostics
    pub expected_bundle_kib: u64,
}

impl Default for BuildSafetyConfig {
    fn default() -> Self {
        Self {
            postcss_config: PathBuf::from(paths::POSTCSS_CONFIG),
            required_plugin: "@tailwindcss/postcss".to_string(),
            next_config: PathBuf::from(paths::NEXT_CONFIG),
            forbidden_directive: "ignoreBuildErrors".to_string(),
            css_dir: PathBuf::from(paths::CSS_CHUNKS_DIR),
            css_glob: paths::CSS_ARTIFACT_GLOB.to_string(),
            min_bundle_bytes: 10 * 1024,
            expected_bundle_kib: 46,
        }
    }
}

/// Policy for the issue-reference gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IssueRefConfig {
    /// Display name of the issue tracker
    pub tracker: String,
    /// Literal prefix of issue IDs, matched case-insensitively
    pub issue_prefix: String,
    /// Marker file holding the active task ID
    pub marker_file: PathBuf,
    /// Mandate document, relative to the repository root
    pub mandate_doc: PathBuf,
    /// Any of these in the mandate document means the mandate applies
    pub mandate_keywords: Vec<String>,
    /// Any of these in the git config marks a managed workspace
    pub workspace_signals: Vec<String>,
    /// Environment variable holding the tracker credential
    pub credential_var: String,
    /// Fallback file that may declare the credential variable
    pub credential_env_file: PathBuf,
    /// Command suggested for creating a task
    pub create_command: String,
    /// Command suggested for closing a task; `{id}` is replaced by the task ID
    pub update_command: String,
}

impl Default for IssueRefConfig {
    fn default() -> Self {
        Self {
            tracker: "Linear".to_string(),
            issue_prefix: "ROM".to_string(),
            marker_file: PathBuf::from(paths::TASK_MARKER_FILE),
            mandate_doc: PathBuf::from(paths::MANDATE_DOC),
            mandate_keywords: vec!["LINEAR-FIRST".to_string(), "Linear".to_string()],
            workspace_signals: vec!["jinyang".to_string(), "worktree".to_string()],
            credential_var: "LINEAR_API_KEY".to_string(),
            credential_env_file: PathBuf::from(paths::CREDENTIAL_ENV_FILE),
            create_command:
                "~/.clawdbot/scripts/linear/create-issue.sh --title 'Task' --team 'YourTeam'"
                    .to_string(),
            update_command: "~/.clawdbot/scripts/linear/update-issue.sh {id} --state 'Done'"
                .to_string(),
        }
    }
}

impl IssueRefConfig {
    /// Placeholder shown where an issue ID is expected, e.g. `ROM-XXX`
    #[must_use]
    pub fn id_placeholder(&self) -> String {
        format!("{}-XXX", self.issue_prefix)
    }

    /// The update command for a concrete task
    #[must_use]
    pub fn update_command_for(&self, task_id: &str) -> String {
        self.update_command.replace("{id}", task_id)
    }
}

impl GateConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| GateError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.commit-gates.toml` from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("no {} in {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| GateError::read(&path, e))?;
        let config = Self::from_toml(&path, &content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
