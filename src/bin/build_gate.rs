//! build-gate - pre-commit checks protecting the stylesheet build

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_gates::cli::build::main()
}
