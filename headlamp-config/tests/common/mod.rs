//! Common test utilities for integration tests.
//!
//! This module provides a sandboxed [`Platform`] and resolution helpers for
//! testing the headlamp-config library without touching the real user
//! directories.

use std::io;
use std::path::{Path, PathBuf};

use headlamp_config::config::{ConfigBuilder, Environment};
use headlamp_config::{Config, Platform, Result};
use tempfile::TempDir;

/// A platform whose directories all live under a temporary root.
///
/// Layout: config dir `<root>/config`, home `<root>/home`, executable
/// `<root>/bin/headlamp-server`. Any of them can be removed to exercise
/// fallbacks. The builder takes a clone; the test keeps `root` alive.
#[derive(Debug, Clone)]
pub struct Sandbox {
    pub config_dir: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub exe: Option<PathBuf>,
    pub windows: bool,
}

#[allow(dead_code)]
impl Sandbox {
    /// A sandbox with every directory available.
    pub fn new(root: &TempDir) -> Self {
        let base = root.path();
        Self {
            config_dir: Some(base.join("config")),
            home_dir: Some(base.join("home")),
            exe: Some(base.join("bin").join("headlamp-server")),
            windows: false,
        }
    }

    /// Drop the OS config directory.
    pub fn without_config_dir(mut self) -> Self {
        self.config_dir = None;
        self
    }

    /// Drop the home directory.
    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    /// Drop the executable path.
    pub fn without_exe(mut self) -> Self {
        self.exe = None;
        self
    }

    /// Use the Windows directory layout.
    pub fn windows(mut self) -> Self {
        self.windows = true;
        self
    }
}

impl Platform for Sandbox {
    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        self.exe
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no executable path"))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}

/// Creates a temporary directory for testing.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Resolve against a sandbox. `args` excludes the program name.
#[allow(dead_code)]
pub fn resolve_with(sandbox: &Sandbox, args: &[&str], env: &[(&str, &str)]) -> Result<Config> {
    ConfigBuilder::new()
        .with_args(std::iter::once("headlamp").chain(args.iter().copied()))
        .with_environment(Environment::from_pairs(env.iter().copied()))
        .with_platform(sandbox.clone())
        .build()
}

/// Resolve with a fresh sandbox; the returned directory must outlive any
/// use of paths in the config.
#[allow(dead_code)]
pub fn resolve(args: &[&str], env: &[(&str, &str)]) -> (Result<Config>, TempDir) {
    let root = create_temp_dir();
    let result = resolve_with(&Sandbox::new(&root), args, env);
    (result, root)
}
