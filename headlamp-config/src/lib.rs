#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(missing_docs))]

//! # headlamp-config
//!
//! Startup configuration resolution for the Headlamp Kubernetes dashboard
//! server.
//!
//! This library merges command-line flags, `HEADLAMP_CONFIG_*` environment
//! variables and built-in defaults into a single validated [`Config`],
//! remembering which values were named explicitly so that mode-dependent
//! defaults never override a user's choice.
//!
//! ## Core Types
//!
//! - [`Config`] and [`ConfigBuilder`]: the resolved configuration and how to
//!   build it
//! - [`Setting`](config::Setting): a value tagged with whether it was explicit
//! - [`Platform`] and [`OsPlatform`]: host directories and filesystem access
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use headlamp_config::config::Environment;
//! use headlamp_config::ConfigBuilder;
//! # use std::path::{Path, PathBuf};
//! # struct Scratch(tempfile::TempDir);
//! # impl headlamp_config::Platform for Scratch {
//! #     fn config_dir(&self) -> Option<PathBuf> { Some(self.0.path().join("config")) }
//! #     fn home_dir(&self) -> Option<PathBuf> { Some(self.0.path().join("home")) }
//! #     fn current_exe(&self) -> std::io::Result<PathBuf> { Ok(self.0.path().join("headlamp")) }
//! #     fn create_dir_all(&self, path: &Path) -> std::io::Result<()> { std::fs::create_dir_all(path) }
//! #     fn is_windows(&self) -> bool { false }
//! # }
//! # let platform = Scratch(tempfile::tempdir().unwrap());
//!
//! let config = ConfigBuilder::new()
//!     .with_args(["headlamp", "--in-cluster", "--oidc-client-id=headlamp"])
//!     .with_environment(Environment::from_pairs([("HEADLAMP_CONFIG_DEV", "true")]))
//!     .with_platform(platform)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.dev_mode);
//! assert_eq!(config.oidc.client_id, "headlamp");
//! // plugin watching defaults to off inside a cluster
//! assert!(!config.should_watch_plugins());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{parse, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use platform::{OsPlatform, Platform};
