//! Temporary working directory with the files the gates read

use std::fs;
use std::path::{Path, PathBuf};

use commit_gates::config::IssueRefConfig;
use tempfile::TempDir;

/// PostCSS config with the Tailwind plugin wired in
pub const HEALTHY_POSTCSS: &str = r#"const config = {
  plugins: {
    "@tailwindcss/postcss": {},
  },
};

export default config;
"#;

/// PostCSS config with the plugin removed
pub const GUTTED_POSTCSS: &str = "export default { plugins: {} };\n";

/// A working directory that is not a git repository
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file, creating parent directories
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a file of exactly `len` bytes
    pub fn write_sized(&self, name: &str, len: usize) -> PathBuf {
        self.write(name, &"a".repeat(len))
    }

    /// Issue policy whose marker and credential files live inside this workspace
    pub fn issue_config(&self) -> IssueRefConfig {
        IssueRefConfig {
            marker_file: self.path().join("marker.txt"),
            credential_env_file: self.path().join("home/.clawdbot/.env"),
            ..IssueRefConfig::default()
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
