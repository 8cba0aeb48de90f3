//! Access to the host platform.
//!
//! Resolution needs a handful of facts about the machine it runs on: where
//! the user's config and home directories are, where the running executable
//! lives, and the ability to create directories. They are gathered behind
//! the [`Platform`] trait so the resolver can be driven entirely by explicit
//! inputs in tests.

use std::fs::DirBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// Host facts and filesystem access used during resolution.
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    /// The OS-reported per-user configuration directory.
    ///
    /// `~/.config` on Linux, `~/Library/Application Support` on macOS,
    /// `%APPDATA%` on Windows.
    fn config_dir(&self) -> Option<PathBuf>;

    /// The current user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Path of the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS cannot report the executable path.
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// Create `path` and all missing parents with mode `rwxr-xr-x`.
    ///
    /// A directory that already exists (including one created concurrently
    /// by another process) is success.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether paths should follow the Windows layout.
    fn is_windows(&self) -> bool;
}

/// The real operating system.
///
/// # Examples
///
/// ```
/// use headlamp_config::{OsPlatform, Platform};
///
/// let platform = OsPlatform;
/// assert_eq!(platform.is_windows(), cfg!(windows));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPlatform;

impl Platform for OsPlatform {
    fn config_dir(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(path)
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}
