//! Command to list every recognized server option.
//!
//! Output is a table by default; `--format` is honoured only with
//! `--structured`.

use crate::error::CliError;
use crate::utils::{write_structured, GlobalOptions};
use clap::Args;
use headlamp_config::config::options;
use serde::Serialize;
use std::io::{self, Write};

/// List every recognized server option.
#[derive(Args)]
pub struct OptionsCommand {
    /// Emit JSON or YAML (see --format) instead of a table
    #[arg(long)]
    pub structured: bool,
}

/// One registry entry as printed.
#[derive(Debug, Serialize)]
struct OptionRow {
    name: &'static str,
    kind: &'static str,
    default: String,
    env: String,
    help: &'static str,
}

impl OptionsCommand {
    /// Execute the options command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rows = option_rows();
        if self.structured {
            return write_structured(&rows, global.format);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_table(&mut out, &rows)?;
        Ok(())
    }
}

fn option_rows() -> Vec<OptionRow> {
    options::all()
        .iter()
        .map(|spec| OptionRow {
            name: spec.name,
            kind: spec.kind.label(),
            default: spec.describe_default(),
            env: spec.env_var(),
            help: spec.help,
        })
        .collect()
}

fn write_table<W: Write>(out: &mut W, rows: &[OptionRow]) -> io::Result<()> {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);
    let env_width = rows.iter().map(|r| r.env.len()).max().unwrap_or(0).max(3);

    writeln!(
        out,
        "{:<name_width$}  {:<6}  {:<env_width$}  DEFAULT",
        "NAME", "TYPE", "ENV"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<name_width$}  {:<6}  {:<env_width$}  {}",
            row.name, row.kind, row.env, row.default
        )?;
    }
    Ok(())
}
