//! Command to validate the server configuration.

use crate::error::CliError;
use crate::utils::{resolve_server_config, GlobalOptions, Resolution};
use clap::Args;

/// Check that the server configuration is valid.
#[derive(Args)]
pub struct ValidateCommand {
    /// Server flags, given after `--`
    #[arg(last = true, value_name = "SERVER_FLAGS")]
    pub server_args: Vec<String>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match resolve_server_config(&self.server_args)? {
            Resolution::Config(_) if !global.quiet => println!("Configuration is valid"),
            Resolution::Config(_) | Resolution::Help => {}
        }
        Ok(())
    }
}
