//! Issue ID detection in commit messages

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Matches `<PREFIX>-<digits>` anywhere in a message, ignoring case
#[derive(Debug, Clone)]
pub struct IssueIdPattern {
    regex: Regex,
}

impl IssueIdPattern {
    /// Compile the pattern for a literal prefix such as `ROM`
    pub fn new(prefix: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!(r"{}-\d+", regex::escape(prefix)))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    /// Every ID in `message`, as written, in order of appearance
    #[must_use]
    pub fn find_all(&self, message: &str) -> Vec<String> {
        self.regex.find_iter(message).map(|m| m.as_str().to_string()).collect()
    }
}
