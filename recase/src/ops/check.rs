//! Check operation - identifier rule validation.

use recase_core::{Error, InvalidReason, validate_identifier_source};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Applies the camelCase/dot.case input rules to every input without
/// converting anything.
pub fn check<I: AsRef<[u8]>>(inputs: &[I]) -> CheckReport {
    let errors = inputs
        .iter()
        .filter_map(|input| {
            let bytes = input.as_ref();
            let result = match std::str::from_utf8(bytes) {
                Ok(text) => validate_identifier_source(text),
                Err(_) => Err(Error::invalid_input(
                    String::from_utf8_lossy(bytes),
                    InvalidReason::NotText,
                )),
            };
            result.err().map(|e| e.to_string())
        })
        .collect();

    CheckReport {
        checked: inputs.len(),
        errors,
    }
}
