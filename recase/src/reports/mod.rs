//! Report data structures for commands.
//!
//! Commands build reports in `ops`, then render them to an Output target.

mod check;
mod convert;
pub(crate) mod output;

pub use check::CheckReport;
pub use convert::{ConvertEntry, ConvertReport};
pub use output::{Report, TerminalOutput};
