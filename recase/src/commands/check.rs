use std::ffi::OsString;

use clap::Args;
use eyre::Result;

use super::read_inputs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Values to check (reads stdin line by line when omitted)
    pub inputs: Vec<OsString>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = read_inputs(&self.inputs)?;

        let report = ops::check(inputs.as_slice());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
