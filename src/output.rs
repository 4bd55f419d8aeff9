//! Output formatting for human and JSON modes
//!
//! Gate results render either as the human-readable text hooks print, or as a
//! single JSON object for tooling.

use colored::Colorize;

use crate::core::models::{CredentialSource, Level, Report, TrackerStatus};
use crate::core::services::CHECK_LINEAR;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

const RULE_WIDTH: usize = 50;

impl Report {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for finding in self.at(Level::Info) {
            println!("{}", finding.message);
        }

        for finding in self.at(Level::Warn) {
            eprintln!("{} {}", "WARNING:".yellow().bold(), finding.message);
        }

        if self.passed() {
            return;
        }

        eprintln!("{} - {}:", "BLOCKED".red().bold(), self.title);
        for finding in self.at(Level::Block) {
            eprintln!("\n   {}", finding.message);
        }
        if let Some(hint) = &self.remediation {
            eprintln!("\n   {hint}");
        }
    }

    fn render_json(&self) {
        let json = serde_json::json!({
            "check": self.check,
            "passed": self.passed(),
            "findings": self.findings,
            "remediation": self.remediation,
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    }
}

impl TrackerStatus {
    /// Render the status based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                let json = serde_json::json!({ "check": CHECK_LINEAR, "status": self });
                println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("{} Enforcement Check", self.tracker);
        println!("{rule}");

        match &self.active_task {
            Some(task) => {
                println!("Active {} task: {}", self.tracker, task.green());
                println!("   Update: {}", self.next_command);
            },
            None => {
                println!("No active {} task", self.tracker);
                println!("   Create: {}", self.next_command);
            },
        }

        match &self.credential {
            CredentialSource::Environment => println!(
                "{} API key configured ({} is set)",
                self.tracker, self.credential_var
            ),
            CredentialSource::EnvFile { path } => println!(
                "{} API key configured (found in {})",
                self.tracker,
                path.display()
            ),
            CredentialSource::Missing => println!("{} API key not found", self.tracker),
        }

        println!("{rule}");
    }
}
