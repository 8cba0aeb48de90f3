//! Configuration system for the Headlamp server.
//!
//! This module resolves the server's startup configuration from three
//! sources:
//! - command-line flags
//! - `HEADLAMP_CONFIG_*` environment variables
//! - built-in defaults from the option registry
//!
//! # Configuration Precedence
//!
//! Values are merged with the following precedence (highest to lowest):
//!
//! 1. Flags named on the invocation
//! 2. Environment variables (`HEADLAMP_CONFIG_*`)
//! 3. Built-in defaults
//!
//! After merging, the raw values are decoded into a typed [`Config`],
//! mode-dependent overrides are applied, the result is validated, and the
//! kubeconfig path is derived.
//!
//! # Examples
//!
//! Resolving with explicit inputs:
//!
//! ```
//! use headlamp_config::config::{ConfigBuilder, Environment, Setting};
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
//! let env = Environment::from_pairs([
//!     ("HEADLAMP_CONFIG_BASE_URL", "/headlamp"),
//!     ("KUBECONFIG", "/etc/kube/config"),
//! ]);
//!
//! let config = ConfigBuilder::new()
//!     .with_args(["headlamp", "--port=9000"])
//!     .with_environment(env)
//!     .with_platform(platform)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.port, 9000);
//! assert_eq!(config.base_url, "/headlamp");
//! assert_eq!(config.kubeconfig, Setting::Default("/etc/kube/config".to_string()));
//! ```
//!
//! Resolving for the running process:
//!
//! ```no_run
//! let config = headlamp_config::parse(std::env::args()).unwrap();
//! ```

pub mod builder;
pub mod decode;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod options;
pub mod overrides;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::{parse, ConfigBuilder};
pub use decode::ConfigDecoder;
pub use environment::Environment;
pub use loader::{ConfigLoader, ExplicitFlags};
pub use merger::{Layered, LayeredValues, Origin};
pub use options::{OptionKind, OptionSpec};
pub use overrides::{apply_overrides, ConditionalOverride};
pub use schema::{Config, OidcConfig, Setting, TelemetryConfig};
pub use validator::ConfigValidator;
