//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve and print the server configuration
//! - `validate`: Check that the server configuration is valid
//! - `options`: List every recognized server option
//! - `kubeconfig_dir`: Create and print the kubeconfig persistence directory
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod kubeconfig_dir;
pub mod options;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use kubeconfig_dir::KubeconfigDirCommand;
pub use options::OptionsCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
