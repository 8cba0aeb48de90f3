//! Command to resolve and print the server configuration.
//!
//! The server flags after `--` are merged with `HEADLAMP_CONFIG_*` variables
//! from the environment and the built-in defaults, exactly as the server
//! would do at startup.

use crate::error::CliError;
use crate::utils::{resolve_server_config, write_structured, GlobalOptions, Resolution};
use clap::Args;
use headlamp_config::config::{ConfigLoader, Environment};
use headlamp_config::{Error, OsPlatform};
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolve and print the server configuration.
#[derive(Args)]
pub struct ResolveCommand {
    /// Print the raw merged values with their source instead
    #[arg(long)]
    pub origins: bool,

    /// Server flags, given after `--`
    #[arg(last = true, value_name = "SERVER_FLAGS")]
    pub server_args: Vec<String>,
}

/// A raw value and the layer that supplied it.
#[derive(Serialize)]
struct OriginEntry {
    value: String,
    origin: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.origins {
            return self.print_origins(global);
        }

        match resolve_server_config(&self.server_args)? {
            Resolution::Config(config) => write_structured(&config, global.format),
            Resolution::Help => Ok(()),
        }
    }

    fn print_origins(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let args: Vec<&str> = std::iter::once("headlamp")
            .chain(self.server_args.iter().map(String::as_str))
            .collect();
        let env = Environment::from_process();
        let values = match ConfigLoader::load(args.as_slice(), &env, &OsPlatform) {
            Ok(values) => values,
            Err(Error::HelpRequested { text }) => {
                print!("{text}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let entries: BTreeMap<&str, OriginEntry> = values
            .iter()
            .map(|(key, layered)| {
                (
                    key,
                    OriginEntry {
                        value: layered.value.clone(),
                        origin: layered.origin.to_string(),
                    },
                )
            })
            .collect();

        write_structured(&entries, global.format)
    }
}
