//! Error types for the gate library
//!
//! Policy violations are not errors: they are reported as blocking findings.
//! `GateError` covers the cases where a check could not be evaluated at all.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while evaluating a gate
#[derive(Debug, Error)]
pub enum GateError {
    /// The git executable could not be spawned
    #[error("failed to run `git {command}`: {source}")]
    GitSpawn {
        /// Arguments passed to git
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("`git {command}` failed: {stderr}")]
    GitFailed {
        /// Arguments passed to git
        command: String,
        /// Trimmed standard error of the git process
        stderr: String,
    },

    /// A file the check depends on could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The commit message file handed to the commit-msg hook is unreadable
    #[error("cannot read commit message file {}: {source}", path.display())]
    CommitMessage {
        /// Path of the commit message file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// `.commit-gates.toml` exists but does not parse
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },

    /// A configured pattern does not compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A build artifact glob is malformed
    #[error("invalid artifact glob: {0}")]
    Glob(#[from] glob::PatternError),
}

impl GateError {
    /// Wrap an IO error with the path it happened on
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GateError>;
