//! Main entry point for the headlamp-config CLI.
//!
//! This is the command-line interface for the Headlamp configuration
//! resolver. It provides commands for inspecting server configuration:
//! - `resolve`: Print the configuration the server would start with
//! - `validate`: Check server flags and environment for errors
//! - `options`: List recognized server options
//! - `kubeconfig-dir`: Show where added kubeconfigs are stored

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = headlamp_config::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Options(cmd) => cmd.execute(&global),
        cli::Command::KubeconfigDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
