//! Build script for headlamp-config-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("headlamp-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and validate Headlamp server configuration")
        .long_about(
            "Resolve the Headlamp server configuration from flags, HEADLAMP_CONFIG_* \
             environment variables and defaults, exactly as the server does at startup",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Structured output format")
                .value_name("FORMAT")
                .value_parser(["json", "yaml"])
                .default_value("json")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve and print the server configuration")
                .long_about("Merge server flags given after -- with the environment and defaults")
                .arg(
                    Arg::new("origins")
                        .long("origins")
                        .help("Print the raw merged values with their source instead")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(server_flags()),
            Command::new("validate")
                .about("Check that the server configuration is valid")
                .long_about("Resolve the server configuration and report the first rule violated")
                .arg(server_flags()),
            Command::new("options")
                .about("List every recognized server option")
                .long_about("Show each option's type, default and environment variable")
                .arg(
                    Arg::new("structured")
                        .long("structured")
                        .help("Emit JSON or YAML (see --format) instead of a table")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("kubeconfig-dir")
                .about("Create and print the kubeconfig persistence directory")
                .long_about("Show where kubeconfigs added through Headlamp are stored")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Print the kubeconfig file inside the directory instead")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .value_name("SHELL")
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .required(true),
                ),
        ])
}

/// Trailing server flags accepted by `resolve` and `validate`.
fn server_flags() -> Arg {
    Arg::new("server_args")
        .help("Server flags, given after `--`")
        .value_name("SERVER_FLAGS")
        .num_args(0..)
        .last(true)
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("headlamp-config.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
