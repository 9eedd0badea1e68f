//! Input rules shared by the camelCase and dot.case conversions.

use crate::{Error, InvalidReason, Result};

/// Placeholder for a missing value. It must never leak into a generated
/// identifier, so converting it is an error.
pub const MISSING_VALUE_SENTINEL: &str = "NA";

/// Check that `input` may be turned into an identifier.
///
/// Rejects inputs that start with an ASCII digit or equal
/// [`MISSING_VALUE_SENTINEL`]. Empty input passes.
pub fn validate_identifier_source(input: &str) -> Result<()> {
    if let Some(reason) = invalid_reason(input) {
        return Err(Error::invalid_input(input, reason));
    }
    Ok(())
}

fn invalid_reason(input: &str) -> Option<InvalidReason> {
    if starts_with_digit(input) {
        return Some(InvalidReason::LeadingDigit);
    }
    if is_sentinel(input) {
        return Some(InvalidReason::Sentinel);
    }
    None
}

fn starts_with_digit(input: &str) -> bool {
    input.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_sentinel(input: &str) -> bool {
    input == MISSING_VALUE_SENTINEL
}
