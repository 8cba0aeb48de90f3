//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, KubeconfigDirCommand, OptionsCommand, ResolveCommand, ValidateCommand,
};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};

/// Inspect and validate Headlamp server configuration.
#[derive(Parser)]
#[command(name = "headlamp-config")]
#[command(
    version,
    about = "Inspect and validate Headlamp server configuration",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Structured output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve and print the server configuration
    Resolve(ResolveCommand),

    /// Check that the server configuration is valid
    Validate(ValidateCommand),

    /// List every recognized server option
    Options(OptionsCommand),

    /// Create and print the kubeconfig persistence directory
    KubeconfigDir(KubeconfigDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
