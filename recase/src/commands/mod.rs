mod check;
mod completions;
mod convert;

use std::{
    ffi::OsString,
    io::{self, BufRead},
};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::{Result, WrapErr};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Positional inputs as raw bytes, or stdin lines when none were given.
pub(crate) fn read_inputs(args: &[OsString]) -> Result<Vec<Vec<u8>>> {
    if !args.is_empty() {
        return Ok(args
            .iter()
            .map(|arg| arg.as_encoded_bytes().to_vec())
            .collect());
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().split(b'\n') {
        let mut line = line.wrap_err("Failed to read stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        inputs.push(line);
    }
    Ok(inputs)
}

#[derive(Parser)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Convert identifiers between kebab-case, camelCase and dot.case")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert values to kebab-case, camelCase or dot.case
    Convert(ConvertCommand),

    /// Check values against the camelCase/dot.case input rules
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
