//! `build-gate` - build-safety checks for the pre-commit stage

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::GlobalArgs;
use crate::adapters::git::GitStagedInspector;
use crate::core::services::BuildSafetyChecker;

/// build-gate - Keep commits from breaking the stylesheet build
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "build-gate",
    version,
    about = "Keep commits from breaking the stylesheet build",
    long_about = "Pre-commit checks protecting the Tailwind CSS pipeline.\n\n\
                  Blocks commits that delete or gut postcss.config.mjs, that silence\n\
                  build errors in next.config.ts, or that follow a build whose CSS\n\
                  bundle is suspiciously small.",
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

/// Build-safety checks
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Block if postcss.config.mjs is deleted or loses the Tailwind plugin
    CheckCriticalFiles,

    /// Block if next.config.ts contains ignoreBuildErrors
    CheckNextConfigSafety,

    /// Block if the built CSS bundle is under the size threshold
    CheckCssBundle,
}

/// Run a parsed `build-gate` invocation
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    super::init_logging(cli.global.verbose);

    let (root, config) = super::workspace()?;
    let checker = BuildSafetyChecker::new(GitStagedInspector::new(&root), config.build, &root);

    let report = match cli.command {
        Command::CheckCriticalFiles => checker.check_critical_files()?,
        Command::CheckNextConfigSafety => checker.check_next_config_safety()?,
        Command::CheckCssBundle => checker.check_css_bundle()?,
    };

    report.render(cli.global.output_mode());
    Ok(ExitCode::from(report.exit_code()))
}

/// Entry point of the `build-gate` binary
#[must_use]
pub fn main() -> ExitCode {
    match super::parse::<Cli>() {
        Ok(cli) => super::finish(run(&cli)),
        Err(code) => code,
    }
}
