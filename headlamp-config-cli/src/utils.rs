//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across commands: global options,
//! resolving server flags against the process environment, and structured
//! output.

use crate::error::CliError;
use clap::ValueEnum;
use headlamp_config::config::Environment;
use headlamp_config::{Config, ConfigBuilder, Error};
use serde::Serialize;
use std::io::{self, Write};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Structured output format.
    pub format: OutputFormat,
}

/// Output format for structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Outcome of resolving server flags.
pub enum Resolution {
    /// A configuration was produced.
    Config(Box<Config>),
    /// `--help` was among the server flags; its text was printed.
    Help,
}

/// Resolve server flags against the current process environment.
///
/// `server_args` excludes the program name. Help requests print the server
/// option help and are not treated as errors.
pub fn resolve_server_config(server_args: &[String]) -> Result<Resolution, CliError> {
    log::debug!("resolving server configuration from {} flags", server_args.len());
    let result = ConfigBuilder::new()
        .with_args(std::iter::once("headlamp".to_string()).chain(server_args.iter().cloned()))
        .with_environment(Environment::from_process())
        .build();

    match result {
        Ok(config) => Ok(Resolution::Config(Box::new(config))),
        Err(Error::HelpRequested { text }) => {
            log::debug!("server help requested");
            print!("{text}");
            Ok(Resolution::Help)
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a serializable value to stdout in the chosen format.
pub fn write_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_structured_to(&mut handle, value, format)
}

/// Write a serializable value to any writer in the chosen format.
pub fn write_structured_to<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, value)?,
    }
    Ok(())
}
