use std::{ffi::OsString, path::PathBuf};

use clap::Args;
use eyre::Result;
use recase_core::Case;

use super::{UnwrapOrExit, read_inputs};
use crate::{
    config::{Config, DEFAULT_CONFIG, Format},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Target case: kebab, camel or dot (defaults to convert.default_case in the config)
    #[arg(short, long)]
    pub to: Option<Case>,

    /// Values to convert (reads stdin line by line when omitted)
    pub inputs: Vec<OsString>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Report failures and continue with the remaining inputs
    #[arg(short, long)]
    pub keep_going: bool,

    /// Path to recase.toml (defaults to ./recase.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let defaults = &config.convert;

        let Some(case) = self.to.or(defaults.default_case) else {
            eyre::bail!(
                "No target case given: pass --to or set convert.default_case in {}",
                DEFAULT_CONFIG
            );
        };
        let format = self.format.or(defaults.format).unwrap_or_default();
        let keep_going = self.keep_going || defaults.keep_going;

        let inputs = read_inputs(&self.inputs)?;
        let report = ops::convert(case, inputs.as_slice(), keep_going);

        match format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => println!("{}", report.to_json()?),
        }

        if report.has_errors() {
            std::process::exit(1);
        }

        Ok(())
    }
}
