//! Findings and reports
//!
//! A gate produces a [`Report`]: a list of [`Finding`]s plus an optional
//! remediation hint. The report blocks the commit iff it holds at least one
//! [`Level::Block`] finding.

use serde::Serialize;

/// How strongly a finding should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational, printed to stdout
    Info,
    /// Shown prominently, does not block
    Warn,
    /// Blocks the commit
    Block,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// One diagnostic produced by a gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity of the finding
    pub level: Level,
    /// Message, possibly spanning several lines
    pub message: String,
}

impl Finding {
    /// Informational finding
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    /// Warning finding
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            message: message.into(),
        }
    }

    /// Blocking finding
    #[must_use]
    pub fn block(message: impl Into<String>) -> Self {
        Self {
            level: Level::Block,
            message: message.into(),
        }
    }
}

/// Outcome of a single gate invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Command name of the gate, e.g. `check-css-bundle`
    pub check: String,
    /// Heading printed above blocking findings
    pub title: String,
    /// Findings in the order they were detected
    pub findings: Vec<Finding>,
    /// Remediation hint printed after blocking findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Report {
    /// Empty (passing) report for a gate
    #[must_use]
    pub fn new(check: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            title: title.into(),
            findings: Vec::new(),
            remediation: None,
        }
    }

    /// Record a finding
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Set the remediation hint
    #[must_use]
    pub fn with_remediation(mut self, hint: impl Into<String>) -> Self {
        self.remediation = Some(hint.into());
        self
    }

    /// Whether the commit may proceed
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(|f| f.level == Level::Block)
    }

    /// Findings of exactly `level`
    pub fn at(&self, level: Level) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.level == level)
    }

    /// Process exit code for this report: 0 to allow, 1 to block
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.passed())
    }
}
