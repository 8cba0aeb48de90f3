//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment whose home and config directories are
//!   temporary
//! - Command builders that start from a cleared process environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated home and config directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Stands in for `$HOME`
    pub home: PathBuf,
    /// Stands in for the OS config directory
    pub config_home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&home).unwrap();

        Self {
            temp_dir,
            home,
            config_home,
        }
    }

    /// A command with no inherited environment apart from the sandbox
    /// directories.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("headlamp-config").expect("Failed to find binary");
        cmd.env_clear()
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("APPDATA", &self.config_home);
        cmd
    }

    /// `resolve` with the given server flags.
    pub fn resolve(&self, server_args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve").arg("--").args(server_args);
        cmd
    }

    /// `validate` with the given server flags.
    pub fn validate(&self, server_args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("validate").arg("--").args(server_args);
        cmd
    }

    /// Run `resolve` and parse its JSON output.
    pub fn resolve_json(&self, server_args: &[&str], env: &[(&str, &str)]) -> serde_json::Value {
        let mut cmd = self.resolve(server_args);
        for (key, value) in env {
            cmd.env(key, value);
        }
        let output = cmd.assert().success().get_output().stdout.clone();
        serde_json::from_slice(&output).expect("resolve should print JSON")
    }

    /// Whether `path` lives inside the sandbox.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(self.temp_dir.path())
    }
}
