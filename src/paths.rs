//! Centralized path definitions for commit-gates
//!
//! Single source of truth for the well-known file locations the gates read.
//! Every location here is only a default: `.commit-gates.toml` may override it.
//!
//! ## Layout
//!
//! ```text
//! repo/                                  # Working directory of the hook
//! ├── .commit-gates.toml                # Optional policy overrides
//! ├── postcss.config.mjs                # Must keep @tailwindcss/postcss
//! ├── next.config.ts                    # Must not contain ignoreBuildErrors
//! ├── AGENTS.md                         # Mandate document
//! └── .next/static/chunks/*.css         # Compiled stylesheet bundle
//!
//! /tmp/current-linear-task.txt           # Marker file (owned by the agent)
//! ~/.clawdbot/.env                       # Credential fallback
//! ```

use std::path::{Path, PathBuf};

/// Optional configuration filename, looked up in the working directory
pub const CONFIG_FILE: &str = ".commit-gates.toml";

/// PostCSS configuration that wires in the Tailwind plugin
pub const POSTCSS_CONFIG: &str = "postcss.config.mjs";

/// Next.js build configuration
pub const NEXT_CONFIG: &str = "next.config.ts";

/// Build output directory holding compiled CSS chunks
pub const CSS_CHUNKS_DIR: &str = ".next/static/chunks";

/// Glob, relative to the chunks directory, matching stylesheet artifacts
pub const CSS_ARTIFACT_GLOB: &str = "*.css";

/// Marker file holding the active task ID
pub const TASK_MARKER_FILE: &str = "/tmp/current-linear-task.txt";

/// Mandate document in the repository root
pub const MANDATE_DOC: &str = "AGENTS.md";

/// Fallback file that may declare the tracker credential
pub const CREDENTIAL_ENV_FILE: &str = "~/.clawdbot/.env";

/// Get the path to `.commit-gates.toml` under `root`.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Expand a leading `~/` to the user's home directory.
///
/// Paths without the prefix, or when no home directory is known, are returned
/// unchanged.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve a configured path against the working directory.
///
/// Absolute paths are kept, `~/` is expanded, everything else is joined to
/// `root`.
#[must_use]
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}
