//! issue-gate - commit-msg and pre-commit checks for tracker issue references

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_gates::cli::issue::main()
}
