//! Command to show the kubeconfig persistence directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use headlamp_config::{paths, OsPlatform};

/// Create and print the directory where added kubeconfigs are stored.
#[derive(Args)]
pub struct KubeconfigDirCommand {
    /// Print the kubeconfig file inside the directory instead
    #[arg(long)]
    pub file: bool,
}

impl KubeconfigDirCommand {
    /// Execute the kubeconfig-dir command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = if self.file {
            paths::default_kubeconfig_file(&OsPlatform)?
        } else {
            paths::make_kubeconfigs_dir(&OsPlatform)?
        };
        println!("{}", path.display());
        Ok(())
    }
}
