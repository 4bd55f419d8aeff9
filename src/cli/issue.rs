//! `issue-gate` - issue-reference checks for the commit-msg and pre-commit stages

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::GlobalArgs;
use crate::adapters::git::GitRepoMetadata;
use crate::config::IssueRefConfig;
use crate::core::services::IssueRefEnforcer;

/// issue-gate - Require tracker issue references on commits
#[derive(Parser, Debug)]
#[command(
    name = "issue-gate",
    version,
    about = "Require tracker issue references on commits",
    long_about = "Enforce the tracker-first mandate from AGENTS.md.\n\n\
                  Commit messages must cite an issue ID (e.g. ROM-123) unless\n\
                  they are maintenance commits such as merges, reverts or chore:.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Flags shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Check to run
    #[command(subcommand)]
    pub command: Command,
}

/// Issue-reference checks
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the active task and whether the tracker credential is configured
    CheckLinear,

    /// Validate that a commit message references an issue (commit-msg hook)
    CheckCommitMsg {
        /// Path to the commit message file
        commit_msg_file: PathBuf,
    },

    /// Warn when no task is active (pre-commit hook, never blocks)
    EnforceTaskExists,
}

/// Run a parsed `issue-gate` invocation
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    super::init_logging(cli.global.verbose);

    let mode = cli.global.output_mode();
    let report = match &cli.command {
        Command::CheckLinear => {
            let (_, enforcer) = advisory_enforcer()?;
            enforcer.tracker_status(|var| std::env::var(var).ok()).render(mode);
            return Ok(ExitCode::SUCCESS);
        },
        Command::CheckCommitMsg { commit_msg_file } => {
            let (root, config) = super::workspace()?;
            IssueRefEnforcer::new(config.issue, &root)?.check_commit_msg(commit_msg_file)?
        },
        Command::EnforceTaskExists => {
            let (root, enforcer) = advisory_enforcer()?;
            enforcer.enforce_task_exists(&GitRepoMetadata::new(&root))
        },
    };

    report.render(mode);
    Ok(ExitCode::from(report.exit_code()))
}

/// Enforcer for the commands that never block
///
/// Configuration problems are logged and the default policy applies.
fn advisory_enforcer() -> anyhow::Result<(PathBuf, IssueRefEnforcer)> {
    let (root, config) = super::lenient_workspace();
    let enforcer = IssueRefEnforcer::new(config.issue, &root).or_else(|e| {
        log::warn!("{e}\nusing default issue policy");
        IssueRefEnforcer::new(IssueRefConfig::default(), &root)
    })?;
    Ok((root, enforcer))
}

/// Entry point of the `issue-gate` binary
#[must_use]
pub fn main() -> ExitCode {
    match super::parse::<Cli>() {
        Ok(cli) => super::finish(run(&cli)),
        Err(code) => code,
    }
}
