//! Commit message whitelist
//!
//! Maintenance commits (merges, reverts, conventional `chore:`-style types,
//! bot commits, ...) are exempt from the issue-reference requirement. Each
//! exemption is a named rule anchored at the start of the trimmed message.
//! Rules are compiled once and evaluated in order; the first match wins.

use regex::Regex;

use crate::error::Result;

/// A single exemption rule
#[derive(Debug, Clone)]
pub struct WhitelistRule {
    name: &'static str,
    pattern: Regex,
}

impl WhitelistRule {
    /// Compile a rule. `pattern` should be anchored with `^`.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
        })
    }

    /// Short identifier of the rule, used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the rule exempts `message` (already trimmed)
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

/// Ordered set of exemption rules
#[derive(Debug, Clone)]
pub struct Whitelist {
    rules: Vec<WhitelistRule>,
}

impl Whitelist {
    /// Build a whitelist from explicit rules
    #[must_use]
    pub const fn from_rules(rules: Vec<WhitelistRule>) -> Self {
        Self { rules }
    }

    /// The standard exemptions
    ///
    /// `tracker` and `issue_prefix` feed the two rules that accept messages
    /// already opening with a tracker tag, e.g. `[Linear]` or `(ROM-12)`.
    pub fn standard(tracker: &str, issue_prefix: &str) -> Result<Self> {
        let tracker = regex::escape(tracker);
        let prefix = regex::escape(issue_prefix);

        let rules = vec![
            WhitelistRule::new(
                "conventional-maintenance",
                r"(?i)^(chore|style|ci|test|docs|refactor|perf|build):",
            )?,
            WhitelistRule::new("merge", r"^Merge (branch|pull request|PR)")?,
            WhitelistRule::new("revert", r"^Revert")?,
            WhitelistRule::new("fixup", r"^fixup!")?,
            WhitelistRule::new("squash", r"^squash!")?,
            WhitelistRule::new("initial-commit", r"(?i)^Initial commit")?,
            WhitelistRule::new("wip", r"(?i)^WIP:")?,
            WhitelistRule::new("draft", r"(?i)^DRAFT:")?,
            WhitelistRule::new("hotfix", r"(?i)^HOTFIX:")?,
            WhitelistRule::new("emergency", r"(?i)^EMERGENCY:")?,
            WhitelistRule::new("tracker-tag", &format!(r"(?i)^[\[(]?{tracker}[\])]"))?,
            WhitelistRule::new("issue-tag", &format!(r"(?i)^[\[(]?{prefix}-\d+[\])]"))?,
            WhitelistRule::new("bump-version", r"(?i)^Bump version")?,
            WhitelistRule::new("release", r"(?i)^Release")?,
            WhitelistRule::new("tag", r"(?i)^Tag v?\d+")?,
            WhitelistRule::new("auto-merge", r"^Auto-merge")?,
            WhitelistRule::new("dependabot", r"^Dependabot")?,
            WhitelistRule::new("bot", r"(?i)^bot:")?,
        ];

        Ok(Self::from_rules(rules))
    }

    /// First rule exempting `message`, after trimming surrounding whitespace
    #[must_use]
    pub fn first_match(&self, message: &str) -> Option<&WhitelistRule> {
        let trimmed = message.trim();
        self.rules.iter().find(|rule| rule.matches(trimmed))
    }

    /// All rules, in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[WhitelistRule] {
        &self.rules
    }
}
