//! Integration tests for the gate binaries
//!
//! These tests run `build-gate` and `issue-gate` the way git hooks do: from
//! the root of a real repository, judging only exit code and output.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use assert_cmd::cargo;
use std::path::Path;

/// Helper function to create a build-gate command
fn build_gate(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("build-gate"));
    cmd.current_dir(dir).env("CLICOLOR", "0").env_remove("RUST_LOG");
    cmd
}

/// Helper function to create an issue-gate command isolated from the real
/// home directory, marker file and credential
fn issue_gate(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("issue-gate"));
    cmd.current_dir(dir)
        .env("HOME", dir.join("home"))
        .env("CLICOLOR", "0")
        .env_remove("LINEAR_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Point the marker file into `dir` so tests never see a real active task
fn isolate_marker(dir: &Path) {
    std::fs::write(
        dir.join(".commit-gates.toml"),
        "[issue]\nmarker_file = \"marker.txt\"\n",
    )
    .expect("Failed to write config");
}
