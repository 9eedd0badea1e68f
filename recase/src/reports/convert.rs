//! Convert command report data structures.

use recase_core::Case;
use serde::Serialize;

use super::output::{Output, Report};

/// Outcome of converting one input.
#[derive(Debug, Serialize)]
pub struct ConvertEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertEntry {
    pub fn converted(input: impl Into<String>, output: String) -> Self {
        Self {
            input: input.into(),
            output: Some(output),
            error: None,
        }
    }

    pub fn failed(input: impl Into<String>, error: &recase_core::Error) -> Self {
        Self {
            input: input.into(),
            output: None,
            error: Some(error.to_string()),
        }
    }
}

/// Report data from a batch conversion.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    /// Target case.
    pub case: Case,
    /// One entry per processed input, in input order.
    pub entries: Vec<ConvertEntry>,
    /// Inputs not processed because an earlier one failed.
    pub skipped: usize,
}

impl ConvertReport {
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.error.is_some())
    }

    /// Render the report as a pretty-printed JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            match (&entry.output, &entry.error) {
                (Some(output), _) => out.value(output),
                (None, Some(error)) => out.warning(error),
                (None, None) => {}
            }
        }

        if self.skipped > 0 {
            out.warning(&format!(
                "stopped after first failure, {} input{} not converted to {} (use --keep-going)",
                self.skipped,
                if self.skipped == 1 { "" } else { "s" },
                self.case
            ));
        }
    }
}
