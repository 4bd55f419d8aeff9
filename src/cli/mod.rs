//! CLI definitions and entry points
//!
//! Both gate binaries share the global flags, logging setup and the mapping of
//! outcomes onto the two exit codes hooks understand: 0 allows the commit,
//! 1 blocks it (including usage errors).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, Parser};
use colored::Colorize;

use crate::config::GateConfig;
use crate::output::OutputMode;

pub mod build;
pub mod issue;

/// Flags accepted by every gate command
#[derive(Args, Debug, Clone, Copy)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Output mode selected by `--json`
    #[must_use]
    pub const fn output_mode(self) -> OutputMode {
        if self.json { OutputMode::Json } else { OutputMode::Human }
    }
}

/// Initialise `env_logger`; `RUST_LOG` still takes precedence
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

/// Parse arguments, turning clap's exit codes into 0 (help, version) or 1
pub fn parse<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    })
}

/// Working directory and configuration for a gate run
pub fn workspace() -> anyhow::Result<(PathBuf, GateConfig)> {
    let root = std::env::current_dir()?;
    let config = GateConfig::load(&root)?;
    Ok((root, config))
}

/// Like [`workspace`], but nothing here can fail the run
///
/// For commands that always exit 0: an unusable `.commit-gates.toml` is
/// logged and the defaults apply.
#[must_use]
pub fn lenient_workspace() -> (PathBuf, GateConfig) {
    let root = std::env::current_dir().unwrap_or_else(|e| {
        log::warn!("cannot determine working directory: {e}");
        PathBuf::from(".")
    });
    let config = GateConfig::load(&root).unwrap_or_else(|e| {
        log::warn!("{e}\nusing default configuration");
        GateConfig::default()
    });
    (root, config)
}

/// Map a run result onto the process exit code
#[must_use]
pub fn finish(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        },
    }
}
