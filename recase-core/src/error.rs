use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for case conversions
pub type Result<T> = std::result::Result<T, Error>;

/// Which precondition an input failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The input is not valid UTF-8 text.
    NotText,
    /// The input starts with a decimal digit.
    LeadingDigit,
    /// The input is the missing-value sentinel.
    Sentinel,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "input must be text"),
            Self::LeadingDigit => write!(f, "input cannot start with a number"),
            Self::Sentinel => write!(
                f,
                "input cannot be the missing-value marker \"{}\"",
                crate::MISSING_VALUE_SENTINEL
            ),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid input '{input}': {reason}")]
    #[diagnostic(
        code(recase::invalid_input),
        help("camelCase and dot.case inputs must be text, must not start with a digit, and must not be \"NA\"")
    )]
    InvalidInput { input: String, reason: InvalidReason },
}

impl Error {
    pub fn invalid_input(input: impl Into<String>, reason: InvalidReason) -> Self {
        Error::InvalidInput {
            input: input.into(),
            reason,
        }
    }

    /// The failed precondition.
    pub fn reason(&self) -> InvalidReason {
        match self {
            Error::InvalidInput { reason, .. } => *reason,
        }
    }
}
